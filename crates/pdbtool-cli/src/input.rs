use crate::error::{CliError, Result};
use std::path::Path;

pub const EXPECTED_EXTENSION: &str = "pdb";

/// Checks that the structure file exists and carries the `.pdb` extension.
pub fn validate_input_path(path: &Path) -> Result<&Path> {
    if !path.exists() {
        return Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some(EXPECTED_EXTENSION) {
        return Err(CliError::WrongFileType {
            path: path.to_path_buf(),
            expected: EXPECTED_EXTENSION,
        });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn existing_pdb_file_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1abc.pdb");
        fs::write(&path, "END\n").unwrap();
        assert_eq!(validate_input_path(&path).unwrap(), path.as_path());
    }

    #[test]
    fn missing_file_is_rejected_before_extension_check() {
        let dir = tempdir().unwrap();
        let err = validate_input_path(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { .. }));
        assert!(err.is_usage_error());
    }

    #[test]
    fn wrong_or_missing_extension_is_rejected() {
        let dir = tempdir().unwrap();
        for name in ["1abc.cif", "1abc", "1abc.PDB", "1abc.pdb.gz"] {
            let path = dir.path().join(name);
            fs::write(&path, "END\n").unwrap();
            assert!(
                matches!(
                    validate_input_path(&path),
                    Err(CliError::WrongFileType { .. })
                ),
                "{name} should be rejected"
            );
        }
    }
}
