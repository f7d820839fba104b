use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StudioError;

/// Write an exported stylesheet into `dir`, creating the directory when
/// needed. Returns the final file path.
pub(crate) fn write_export(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, StudioError> {
    fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    write_atomic(&path, contents.as_bytes())?;
    log::info!("exported {}", path.display());

    Ok(path)
}

/// Place `text` on the system clipboard.
pub(crate) fn copy_to_clipboard(text: &str) -> Result<(), StudioError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    log::debug!("copied {} bytes to the clipboard", text.len());
    Ok(())
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::write_export;

    #[test]
    fn given_missing_directory_when_exporting_then_file_is_created() {
        let root = test_temp_dir("nested");
        let dir = root.join("styles").join("gradients");

        let path = write_export(&dir, "hero.css", ".hero {}\n")
            .expect("export should be written");

        assert_eq!(path, dir.join("hero.css"));
        assert_eq!(
            fs::read_to_string(&path).expect("export should be readable"),
            ".hero {}\n"
        );
        assert!(!dir.join("hero.css.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_existing_file_when_exporting_then_contents_are_replaced() {
        let root = test_temp_dir("replace");
        write_export(&root, "_hero.scss", "old").expect("first write");

        let path =
            write_export(&root, "_hero.scss", "new").expect("second write");

        assert_eq!(fs::read_to_string(path).expect("readable"), "new");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "gradia-export-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
