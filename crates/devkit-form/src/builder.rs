use crate::error::{FormError, FormResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Input,
    Password,
    Email,
    Checkbox,
    Radio,
    Button,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Input => "input",
            ElementKind::Password => "password",
            ElementKind::Email => "email",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Radio => "radio",
            ElementKind::Button => "button",
        }
    }

    /// The `type` attribute for kinds rendered as a plain `<input>`
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ElementKind::Input => Some("text"),
            ElementKind::Password => Some("password"),
            ElementKind::Email => Some("email"),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = FormError;

    fn from_str(s: &str) -> FormResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" | "text" => Ok(ElementKind::Input),
            "password" => Ok(ElementKind::Password),
            "email" => Ok(ElementKind::Email),
            "checkbox" => Ok(ElementKind::Checkbox),
            "radio" => Ok(ElementKind::Radio),
            "button" | "submit" => Ok(ElementKind::Button),
            _ => Err(FormError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormElement {
    pub kind: ElementKind,
    pub label: String,
    pub id: String,
}

/// Ordered list of form elements.
///
/// Ids are `input-N` with `N` counting every element ever added, so they
/// stay unique after removals.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    elements: Vec<FormElement>,
    next_id: usize,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `kind:label` lines. Blank lines and `#` comments are skipped.
    pub fn from_spec(spec: &str) -> FormResult<Self> {
        let mut builder = Self::new();

        for (index, raw) in spec.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (kind, label) = line.split_once(':').unwrap_or((line, ""));
            let kind = kind
                .parse::<ElementKind>()
                .map_err(|e| FormError::InvalidSpecLine {
                    line: index + 1,
                    message: e.to_string(),
                })?;
            let id = builder.add(kind);
            builder.set_label(&id, label.trim())?;
        }

        debug!(elements = builder.len(), "parsed form spec");
        Ok(builder)
    }

    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element with an empty label and return its id
    pub fn add(&mut self, kind: ElementKind) -> String {
        let id = format!("input-{}", self.next_id);
        self.next_id += 1;
        self.elements.push(FormElement {
            kind,
            label: String::new(),
            id: id.clone(),
        });
        id
    }

    pub fn set_label(&mut self, id: &str, label: &str) -> FormResult<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|el| el.id == id)
            .ok_or_else(|| FormError::UnknownElement(id.to_string()))?;
        element.label = label.to_string();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> FormResult<FormElement> {
        let position = self
            .elements
            .iter()
            .position(|el| el.id == id)
            .ok_or_else(|| FormError::UnknownElement(id.to_string()))?;
        Ok(self.elements.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut builder = FormBuilder::new();
        assert_eq!(builder.add(ElementKind::Input), "input-0");
        assert_eq!(builder.add(ElementKind::Email), "input-1");
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.elements()[1].label, "");
    }

    #[test]
    fn test_ids_stay_unique_after_remove() {
        let mut builder = FormBuilder::new();
        let first = builder.add(ElementKind::Input);
        builder.add(ElementKind::Input);
        let removed = builder.remove(&first).unwrap();
        assert_eq!(removed.id, "input-0");
        assert_eq!(builder.add(ElementKind::Button), "input-2");
    }

    #[test]
    fn test_set_label_unknown_id() {
        let mut builder = FormBuilder::new();
        let err = builder.set_label("input-9", "Name").unwrap_err();
        assert!(matches!(err, FormError::UnknownElement(id) if id == "input-9"));
        assert!(builder.remove("input-9").is_err());
    }

    #[test]
    fn test_from_spec() {
        let builder = FormBuilder::from_spec(
            "# signup\ninput: Full Name\n\nemail:Email\npassword\nsubmit: Register\n",
        )
        .unwrap();
        let summary: Vec<(ElementKind, &str)> = builder
            .elements()
            .iter()
            .map(|el| (el.kind, el.label.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ElementKind::Input, "Full Name"),
                (ElementKind::Email, "Email"),
                (ElementKind::Password, ""),
                (ElementKind::Button, "Register"),
            ]
        );
    }

    #[test]
    fn test_from_spec_reports_line() {
        let err = FormBuilder::from_spec("input:Name\nslider:Volume").unwrap_err();
        assert!(matches!(err, FormError::InvalidSpecLine { line: 2, .. }));
    }
}
