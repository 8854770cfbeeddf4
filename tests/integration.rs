// SPDX-License-Identifier: MPL-2.0
use image_rs::{ImageFormat, Rgba, RgbaImage};
use pixelweaver::application::port::HandoffSlot;
use pixelweaver::config;
use pixelweaver::domain::generation::GenerationPhase;
use pixelweaver::i18n::fluent::I18n;
use pixelweaver::infrastructure::{FileSlot, PassThrough};
use pixelweaver::media::{EncodedImage, IncomingFile, LoadedImage};
use pixelweaver::ui::{mockup, uploader};
use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .expect("encode png");
    cursor.into_inner()
}

fn png_image(name: &str, color: [u8; 4]) -> LoadedImage {
    IncomingFile::new(name, "image/png", png_bytes(16, 8, color))
        .into_loaded_image()
        .expect("decodable png")
}

fn mount(slot: &dyn HandoffSlot) -> mockup::State {
    mockup::State::mount(mockup::read_overlay(slot), mockup::Settings::default())
}

fn uploader_with(slot: Arc<dyn HandoffSlot>) -> uploader::State {
    uploader::State::new(uploader::Settings::default(), Arc::new(PassThrough), slot)
}

#[test]
fn upload_generate_and_mount_mockup_through_file_slot() {
    let dir = tempdir().expect("temp dir");
    let slot: Arc<dyn HandoffSlot> = Arc::new(FileSlot::new(dir.path()));
    let mut widget = uploader_with(Arc::clone(&slot));
    let start = Instant::now();

    assert!(widget.accept_image(png_image("design.png", [255, 0, 0, 255])));
    let result = png_image("result.png", [0, 0, 255, 128]);
    let result_bytes = result.encoded.bytes().to_vec();
    assert!(widget.supply_result(result).expect("slot write"));
    assert!(widget.start_generation(start));
    assert!(widget.tick(start + Duration::from_millis(1500)));
    assert_eq!(widget.phase(), GenerationPhase::Generated);
    assert_eq!(widget.progress(), 100);

    assert!(widget.proceed_to_next_screen().expect("handoff"));

    let compositor = mount(slot.as_ref());
    let overlay = compositor.overlay().expect("overlay present");
    assert_eq!(overlay.encoded.bytes(), result_bytes.as_slice());
    assert_eq!(overlay.display.width, 16);
    assert_eq!(overlay.display.height, 8);
}

#[test]
fn write_after_mount_is_seen_only_by_next_mount() {
    let dir = tempdir().expect("temp dir");
    let slot = FileSlot::new(dir.path());
    let first = EncodedImage::new("image/png", png_bytes(4, 4, [1, 2, 3, 255]));
    let second = EncodedImage::new("image/png", png_bytes(6, 6, [4, 5, 6, 255]));

    slot.write(&first).expect("write first");
    let mounted = mount(&slot);
    slot.write(&second).expect("write second");

    let stale = mounted.overlay().expect("overlay");
    assert_eq!(stale.encoded, first);

    let remounted = mount(&slot);
    assert_eq!(remounted.overlay().expect("overlay").encoded, second);
}

#[test]
fn last_writer_wins_across_slot_instances() {
    let dir = tempdir().expect("temp dir");
    let writer_a = FileSlot::new(dir.path());
    let writer_b = FileSlot::new(dir.path());
    let x = EncodedImage::new("image/png", vec![1, 2, 3]);
    let y = EncodedImage::new("image/webp", vec![9, 8, 7]);

    writer_a.write(&x).expect("write x");
    writer_b.write(&y).expect("write y");

    let reader = FileSlot::new(dir.path());
    assert_eq!(reader.read().expect("read"), Some(y));
}

#[test]
fn non_image_upload_leaves_widget_idle() {
    let dir = tempdir().expect("temp dir");
    let mut widget = uploader_with(Arc::new(FileSlot::new(dir.path())));

    let text = IncomingFile::new("notes.txt", "text/plain", b"hello".to_vec());
    widget.update(
        uploader::Message::ImageFileLoaded(text.into_loaded_image()),
        Instant::now(),
    );
    assert_eq!(widget.phase(), GenerationPhase::Idle);
    assert!(!widget.can_start_generation());
}

#[test]
fn settings_file_drives_generation_and_language() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    std::fs::write(
        &path,
        "[general]\nlanguage = \"fr\"\n\n[generation]\nduration_ms = 400\nrequire_result_upload = false\n",
    )
    .expect("write config");

    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let settings = uploader::Settings::from_config(&loaded);
    assert_eq!(settings.duration, Duration::from_millis(400));

    // Without a required result upload the strategy output is handed off.
    let slot: Arc<dyn HandoffSlot> = Arc::new(FileSlot::new(dir.path()));
    let mut widget = uploader::State::new(settings, Arc::new(PassThrough), Arc::clone(&slot));
    let start = Instant::now();
    let design = png_image("design.png", [10, 20, 30, 255]);
    let design_bytes = design.encoded.bytes().to_vec();

    assert!(widget.accept_image(design));
    assert!(widget.start_generation(start));
    assert!(!widget.tick(start + Duration::from_millis(399)));
    assert!(widget.tick(start + Duration::from_millis(400)));
    assert!(widget.proceed_to_next_screen().expect("handoff"));

    let handed_off = slot.read().expect("read").expect("value");
    assert_eq!(handed_off.bytes(), design_bytes.as_slice());
}
