//! Contact persistence
//!
//! JSON is the primary on-disk format (a plain array of contacts); CSV is an
//! interchange format with a fixed header. Loading from a missing file
//! returns an empty book.

use crate::contacts::{Contact, ContactBook};
use crate::error::Result;
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Save the book as a JSON array
pub fn save_json<P: AsRef<Path>>(book: &ContactBook, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), book)?;
    info!("Saved {} contacts to {}", book.len(), path.display());
    Ok(())
}

/// Load a book from a JSON array; a missing file yields an empty book
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ContactBook> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{} not found, starting with an empty book", path.display());
            return Ok(ContactBook::new());
        }
        Err(e) => return Err(e.into()),
    };
    let book = serde_json::from_reader(BufReader::new(file))?;
    Ok(book)
}

/// Save the book as CSV with a first_name,last_name,phone,email header
pub fn save_csv<P: AsRef<Path>>(book: &ContactBook, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for contact in book.iter() {
        writer.serialize(contact)?;
    }
    writer.flush()?;
    info!("Saved {} contacts to {}", book.len(), path.display());
    Ok(())
}

/// Load a book from CSV; a missing file yields an empty book
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ContactBook> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("{} not found, starting with an empty book", path.display());
        return Ok(ContactBook::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut contacts = Vec::new();
    for record in reader.deserialize() {
        let contact: Contact = record?;
        contacts.push(contact);
    }
    Ok(ContactBook::from_contacts(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        book.add(Contact::new(
            "Alice",
            "Papadopoulou",
            "+30 210 1234567",
            "alice@example.com",
        ));
        book.add(Contact::new(
            "Vasilis",
            "Kostopoulos",
            "+30 210 7654321",
            "vasilis@example.com",
        ));
        book
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let book = sample_book();
        save_json(&book, &path).unwrap();
        let loaded = load_json(&path).unwrap();

        assert_eq!(book, loaded);
    }

    #[test]
    fn test_json_format_is_plain_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        save_json(&sample_book(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"first_name\""));
    }

    #[test]
    fn test_load_json_missing_file_yields_empty_book() {
        let dir = tempdir().unwrap();
        let book = load_json(dir.path().join("missing.json")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.csv");

        let book = sample_book();
        save_csv(&book, &path).unwrap();
        let loaded = load_csv(&path).unwrap();

        assert_eq!(book, loaded);
    }

    #[test]
    fn test_csv_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.csv");

        save_csv(&sample_book(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("first_name,last_name,phone,email"));
    }

    #[test]
    fn test_load_csv_missing_file_yields_empty_book() {
        let dir = tempdir().unwrap();
        let book = load_csv(dir.path().join("missing.csv")).unwrap();
        assert!(book.is_empty());
    }
}
