use std::path::Path;

use envndict_core::dictionary::LoadError;

use crate::envi::EnViDict;

pub struct EnViLoader;

impl EnViLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<EnViDict, LoadError> {
        tracing::info!("Loading en_vi dictionary from {}", path.display());

        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            LoadError::InvalidFormat(format!("{} is not UTF-8: {e}", path.display()))
        })?;

        let dict = EnViDict::from_text(&text);
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load the main dictionary and layer additional ones on top
    pub fn load_with_additional<P: AsRef<Path>>(
        path: &Path,
        additional: &[P],
    ) -> Result<EnViDict, LoadError> {
        let mut dict = Self::load_from_file(path)?;
        for extra in additional {
            dict = dict.merge(Self::load_from_file(extra.as_ref())?);
        }
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use envndict_core::dictionary::LocalDictionary;

    use super::*;

    fn dictionary_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = dictionary_file("@hello /hə'lou/\n- xin chào\n".as_bytes());

        let dict = EnViLoader::load_from_file(file.path()).unwrap();

        assert_eq!(dict.check("hello").as_deref(), Some("/hə'lou/\n- xin chào"));
    }

    #[test]
    fn test_missing_file() {
        let err = EnViLoader::load_from_file(Path::new("/nonexistent/en_vi")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let file = dictionary_file(&[b'@', 0xff, 0xfe, b'\n']);
        let err = EnViLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
    }

    #[test]
    fn test_additional_dictionaries_are_layered() {
        let main = dictionary_file("@cat\n- con mèo\n".as_bytes());
        let extra = dictionary_file("@kitten\n- mèo con\n".as_bytes());

        let dict = EnViLoader::load_with_additional(main.path(), &[extra.path()]).unwrap();

        assert_eq!(dict.entry_count(), 2);
        assert_eq!(dict.check("kitten").as_deref(), Some("- mèo con"));
    }
}
