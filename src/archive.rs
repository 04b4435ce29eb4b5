//! Archive Resolver: extract recognized images from a submission ZIP.
//!
//! Entries are matched against expected base filenames only; any directory
//! prefix inside the archive is ignored, so `foo/public.png` and
//! `public.png` both resolve to the `public.png` role. Unrecognized entries
//! are skipped. The resolver returns whatever it found; callers decide
//! whether an absent entry is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::loader::decode_image;
use crate::tensor::ImageTensor;

/// Extract and decode all archive entries whose base filename is listed in
/// `expected`, keyed by the matched name.
///
/// Entries are visited in the order the archive index stores them; if
/// several entries share an expected base name, the last one visited wins.
/// The archive handle and each entry reader are released before this
/// function returns, on error paths included.
///
/// # Errors
///
/// Returns [`Error::Io`] if the archive cannot be opened, [`Error::Archive`]
/// if it is not a valid ZIP, and [`Error::Decode`] if a matched entry is not
/// a supported image.
pub fn extract_images(
    archive_path: &Path,
    expected: &[&str],
) -> Result<HashMap<String, ImageTensor>> {
    let file = File::open(archive_path).map_err(|source| Error::Io {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| Error::Archive {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut found = HashMap::new();
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|e| Error::Archive {
            path: archive_path.to_path_buf(),
            reason: format!("entry {index}: {e}"),
        })?;
        let entry_name = entry.name().to_string();
        let base = Path::new(&entry_name)
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string);
        let Some(base) = base else { continue };

        if let Some(key) = expected.iter().find(|&&name| name == base) {
            let resource = format!("{}!{entry_name}", archive_path.display());
            let tensor = decode_image(entry, &resource)?;
            found.insert((*key).to_string(), tensor);
        }
        // entry reader dropped here, before the next one is opened
    }

    Ok(found)
}
