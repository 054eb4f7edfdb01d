use crate::core::descriptor::load_descriptor;
use crate::core::{AffineMatrix, ConfigProvider, Extent, Pipeline, Storage, TransformRecord};
use crate::utils::error::{Result, TransformError};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// SVG 原始位元組，加上根元素上的 width / height
#[derive(Debug, Clone)]
pub struct SvgDocument {
    source: Vec<u8>,
    extent: Extent,
    origin: PathBuf,
}

impl SvgDocument {
    /// Reads up to the root element and picks up its integer `width` and `height`.
    pub fn from_bytes(source: Vec<u8>, path: &Path) -> Result<Self> {
        let mut reader = Reader::from_reader(source.as_slice());
        let mut buf = Vec::new();

        let extent = loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) => break root_extent(e, path)?,
                Event::Eof => {
                    return Err(TransformError::InvalidSubjectError {
                        path: path.to_path_buf(),
                        reason: "document has no root element".to_string(),
                    })
                }
                _ => {}
            }
            buf.clear();
        };

        Ok(Self {
            source,
            extent,
            origin: path.to_path_buf(),
        })
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.source
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.source
    }
}

fn root_extent(root: &BytesStart, path: &Path) -> Result<Extent> {
    let width = dimension(root, "width", path)?;
    let height = dimension(root, "height", path)?;
    Ok(Extent::new(width, height))
}

fn dimension(root: &BytesStart, name: &str, path: &Path) -> Result<u32> {
    let invalid = |reason: String| TransformError::InvalidSubjectError {
        path: path.to_path_buf(),
        reason,
    };

    let attr = root
        .try_get_attribute(name)?
        .ok_or_else(|| invalid(format!("root element has no '{}' attribute", name)))?;
    let raw = attr.unescape_value()?;
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let value = digits
        .parse::<u32>()
        .map_err(|_| invalid(format!("'{}' is not an integer: \"{}\"", name, raw)))?;
    if value == 0 {
        return Err(invalid(format!("'{}' must be positive", name)));
    }
    Ok(value)
}

/// Moves everything inside the root element into one new `<g>` carrying
/// `transform="matrix(...)"`. Bytes outside the root, and the root tag
/// itself, are written back untouched.
pub fn wrap_in_transform_group(document: &SvgDocument, matrix: &AffineMatrix) -> Result<SvgDocument> {
    let mut reader = Reader::from_reader(document.as_bytes());
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    let transform = matrix.to_string();
    let mut depth = 0usize;
    let mut group_name: Option<String> = None;
    let mut wrapped = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,

            Event::Start(e) if depth == 0 && !wrapped => {
                let name = group_element_name(&e);
                writer.write_event(Event::Start(e))?;
                writer.write_event(Event::Start(group_start(&name, &transform)))?;
                group_name = Some(name);
                depth += 1;
            }

            // 自我封閉的根元素: <svg/> 改寫成 <svg><g/></svg>
            Event::Empty(e) if depth == 0 && !wrapped => {
                let name = group_element_name(&e);
                writer.write_event(Event::Start(e.borrow()))?;
                writer.write_event(Event::Empty(group_start(&name, &transform)))?;
                writer.write_event(Event::End(e.to_end()))?;
                wrapped = true;
            }

            Event::Start(e) => {
                depth += 1;
                writer.write_event(Event::Start(e))?;
            }

            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(name) = group_name.take() {
                        writer.write_event(Event::End(BytesEnd::new(name)))?;
                        wrapped = true;
                    }
                }
                writer.write_event(Event::End(e))?;
            }

            e => writer.write_event(e)?,
        }
        buf.clear();
    }

    if !wrapped {
        return Err(TransformError::InvalidSubjectError {
            path: document.origin.clone(),
            reason: "root element is not closed".to_string(),
        });
    }

    tracing::debug!("Wrapped root content in <g transform=\"{}\">", transform);

    Ok(SvgDocument {
        source: writer.into_inner().into_inner(),
        extent: document.extent,
        origin: document.origin.clone(),
    })
}

/// `g`, 或沿用根元素的前綴 (例如 `svg:g`)
fn group_element_name(root: &BytesStart) -> String {
    match root.name().prefix() {
        Some(prefix) => format!("{}:g", String::from_utf8_lossy(prefix.as_ref())),
        None => "g".to_string(),
    }
}

fn group_start<'a>(name: &'a str, transform: &'a str) -> BytesStart<'a> {
    let mut group = BytesStart::new(name);
    group.push_attribute(("transform", transform));
    group
}

pub struct VectorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VectorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for VectorPipeline<S, C> {
    type Subject = SvgDocument;

    fn load_descriptor(&self) -> Result<TransformRecord> {
        load_descriptor(&self.storage, self.config.descriptor_path())
    }

    fn load_subject(&self) -> Result<SvgDocument> {
        let path = self.config.subject_path();
        let data = self.storage.read_file(path)?;
        let document = SvgDocument::from_bytes(data, path)?;

        tracing::debug!(
            "Parsed {} (width={}, height={})",
            path.display(),
            document.extent.width,
            document.extent.height
        );
        Ok(document)
    }

    fn extent(&self, subject: &SvgDocument) -> Extent {
        subject.extent()
    }

    fn apply(&self, subject: SvgDocument, matrix: &AffineMatrix) -> Result<SvgDocument> {
        wrap_in_transform_group(&subject, matrix)
    }

    fn save(&self, subject: SvgDocument) -> Result<PathBuf> {
        let path = self.config.output_path();
        tracing::debug!("Writing SVG document ({} bytes)", subject.as_bytes().len());
        self.storage.write_file(path, &subject.into_bytes())
    }
}
