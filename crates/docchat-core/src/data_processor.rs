use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IngestSettings;
use crate::error::{Error, Result};
use crate::traits::PageExtractor;
use crate::types::{DocumentMeta, IngestRequest};

/// Page separator emitted by text converters such as `pdftotext`.
pub const PAGE_SEPARATOR: char = '\u{0C}';

/// Reads plain-text files, one page per form-feed separated segment.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    max_file_bytes: u64,
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new(&IngestSettings::default())
    }
}

impl PlainTextExtractor {
    pub fn new(settings: &IngestSettings) -> Self {
        Self { max_file_bytes: settings.max_file_bytes }
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        let size = fs::metadata(file_path).map_err(|e| Error::io(file_path, e))?.len();
        if size > self.max_file_bytes {
            return Err(Error::FileTooLarge { path: file_path.to_path_buf(), size, limit: self.max_file_bytes });
        }
        let bytes = fs::read(file_path).map_err(|e| Error::io(file_path, e))?;
        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}

impl PageExtractor for PlainTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.read_file_content(path)?;
        Ok(split_pages(&content))
    }
}

/// Split text into pages on form feeds. A trailing separator does not start
/// an extra page; text without separators is a single page.
pub fn split_pages(content: &str) -> Vec<String> {
    let body = content.strip_suffix(PAGE_SEPARATOR).unwrap_or(content);
    body.split(PAGE_SEPARATOR).map(str::to_string).collect()
}

/// A document read from disk, ready to hand to the ingest boundary.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub meta: DocumentMeta,
    pub pages: Vec<String>,
}

impl From<LoadedDocument> for IngestRequest {
    fn from(doc: LoadedDocument) -> Self {
        IngestRequest { meta: doc.meta, pages: doc.pages }
    }
}

pub struct DataProcessor {
    extractor: Box<dyn PageExtractor>,
}

impl Default for DataProcessor {
    fn default() -> Self {
        Self::new(Box::new(PlainTextExtractor::default()))
    }
}

impl DataProcessor {
    pub fn new(extractor: Box<dyn PageExtractor>) -> Self {
        Self { extractor }
    }

    /// Load a single file; its id is the file name.
    pub fn load_file(&self, file_path: &Path) -> Result<LoadedDocument> {
        let id = Self::file_name(file_path);
        self.load_as(file_path, id)
    }

    /// Load every `.txt` file under `data_dir`, sorted by path. Ids are paths
    /// relative to `data_dir`.
    pub fn load_directory(&self, data_dir: &Path) -> Result<Vec<LoadedDocument>> {
        let files = self.list_txt_files(data_dir);
        if files.is_empty() {
            tracing::warn!(dir = %data_dir.display(), "no .txt files found");
            return Ok(vec![]);
        }
        let mut documents = Vec::with_capacity(files.len());
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "loading file {}/{}", file_index + 1, files.len());
            let relative = file_path.strip_prefix(data_dir).unwrap_or(file_path);
            let id = relative.to_string_lossy().replace('\\', "/");
            documents.push(self.load_as(file_path, id)?);
        }
        tracing::info!(dir = %data_dir.display(), documents = documents.len(), "loaded directory");
        Ok(documents)
    }

    /// Load a file or, if `path` is a directory, every `.txt` file below it.
    pub fn load_path(&self, path: &Path) -> Result<Vec<LoadedDocument>> {
        if path.is_dir() {
            self.load_directory(path)
        } else {
            Ok(vec![self.load_file(path)?])
        }
    }

    fn load_as(&self, file_path: &Path, id: String) -> Result<LoadedDocument> {
        let pages = self.extractor.extract_pages(file_path)?;
        let meta = DocumentMeta {
            id,
            name: Self::file_name(file_path),
            source_location: file_path.to_string_lossy().to_string(),
        };
        Ok(LoadedDocument { meta, pages })
    }

    fn file_name(file_path: &Path) -> String {
        file_path
            .file_name()
            .map_or_else(|| file_path.to_string_lossy().to_string(), |n| n.to_string_lossy().to_string())
    }

    fn list_txt_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut txt_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                txt_files.push(path.to_path_buf());
            }
        }
        txt_files.sort();
        txt_files
    }
}
