// SPDX-License-Identifier: MPL-2.0
//! Handoff slot stored as a CBOR file in the application data directory.
//!
//! The file holds a single record `{ key, value }` where `value` is the image
//! as a base64 data URI. Writes go to a sibling temporary file that is then
//! renamed over the slot file, so a reader sees either the previous value or
//! the new one.

use crate::application::port::{HandoffSlot, HANDOFF_KEY};
use crate::error::{Error, Result};
use crate::media::EncodedImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const SLOT_EXTENSION: &str = "cbor";
const TEMP_EXTENSION: &str = "cbor.tmp";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SlotRecord {
    key: String,
    value: String,
}

/// File-backed [`HandoffSlot`].
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Creates a slot that lives in `dir`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the slot file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{HANDOFF_KEY}.{SLOT_EXTENSION}"))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{HANDOFF_KEY}.{TEMP_EXTENSION}"))
    }

    fn write_record(path: &Path, record: &SlotRecord) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        ciborium::into_writer(record, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl HandoffSlot for FileSlot {
    fn write(&self, image: &EncodedImage) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let record = SlotRecord {
            key: HANDOFF_KEY.to_string(),
            value: image.to_data_uri(),
        };
        let temp = self.temp_path();
        Self::write_record(&temp, &record)?;
        fs::rename(&temp, self.path())?;

        log::debug!(
            "handoff slot written: {} ({} bytes)",
            image.content_type(),
            image.len()
        );
        Ok(())
    }

    fn read(&self) -> Result<Option<EncodedImage>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(fs::File::open(&path)?);
        let record: SlotRecord = ciborium::from_reader(reader)?;
        if record.key != HANDOFF_KEY {
            return Err(Error::Slot(format!("unexpected slot key `{}`", record.key)));
        }

        EncodedImage::from_data_uri(&record.value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn image(bytes: &[u8]) -> EncodedImage {
        EncodedImage::new("image/png", bytes.to_vec())
    }

    #[test]
    fn empty_slot_reads_none() {
        let dir = tempdir().expect("temp dir");
        let slot = FileSlot::new(dir.path());
        assert!(slot.read().expect("read").is_none());
    }

    #[test]
    fn write_then_read_is_bit_identical() {
        let dir = tempdir().expect("temp dir");
        let slot = FileSlot::new(dir.path());
        let original = image(&[0, 1, 2, 250, 255]);

        slot.write(&original).expect("write");
        let loaded = slot.read().expect("read").expect("value present");

        assert_eq!(loaded, original);
    }

    #[test]
    fn later_write_replaces_earlier_value() {
        let dir = tempdir().expect("temp dir");
        let slot = FileSlot::new(dir.path());

        slot.write(&image(b"first")).expect("write x");
        slot.write(&image(b"second")).expect("write y");

        let loaded = slot.read().expect("read").expect("value present");
        assert_eq!(loaded.bytes(), b"second");
    }

    #[test]
    fn write_creates_missing_directory_and_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        let slot = FileSlot::new(&nested);

        slot.write(&image(b"x")).expect("write");

        assert!(slot.path().exists());
        assert!(!slot.temp_path().exists());
    }

    #[test]
    fn slot_file_is_named_after_fixed_key() {
        let slot = FileSlot::new("/data");
        assert_eq!(slot.path(), PathBuf::from("/data/processedImage.cbor"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let slot = FileSlot::new(dir.path());
        fs::write(slot.path(), b"not cbor at all").expect("write garbage");

        assert!(slot.read().is_err());
    }

    #[test]
    fn foreign_key_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let slot = FileSlot::new(dir.path());
        let record = SlotRecord {
            key: "somethingElse".into(),
            value: image(b"x").to_data_uri(),
        };
        FileSlot::write_record(&slot.path(), &record).expect("write record");

        assert!(matches!(slot.read(), Err(Error::Slot(_))));
    }
}
