use serde_json::{Map, Value};
use std::fmt;

/// Figure `type` tags accepted by the document schema.
pub(crate) const FIGURE_TYPES: [&str; 5] = ["point", "rectangle", "square", "circle", "polygon"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Key(key) => {
                s.push_str("[\"");
                s.push_str(key);
                s.push_str("\"]");
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Check the structural shape of a raw scene document.
///
/// All violations are collected; the document is accepted only when there are none.
pub(crate) fn validate_document(doc: &Value) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();
    let mut path = Vec::new();

    match doc.as_object() {
        Some(root) => validate_root(root, &mut path, &mut errors),
        None => errors.push(SchemaError::at(&path, "document must be an object")),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn validate_root(
    root: &Map<String, Value>,
    path: &mut Vec<SchemaPathElem>,
    errors: &mut Vec<SchemaError>,
) {
    if let Some(figures) = required(root, "Figures", path, errors) {
        path.push(SchemaPathElem::Field("Figures"));
        match figures.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    path.push(SchemaPathElem::Index(i));
                    validate_figure(item, path, errors);
                    path.pop();
                }
            }
            None => errors.push(SchemaError::at(path, "must be an array")),
        }
        path.pop();
    }

    if let Some(screen) = required(root, "Screen", path, errors) {
        path.push(SchemaPathElem::Field("Screen"));
        match screen.as_object() {
            Some(obj) => {
                positive_int(obj, "width", path, errors);
                positive_int(obj, "height", path, errors);
                required_string(obj, "bg_color", path, errors);
                required_string(obj, "fg_color", path, errors);
            }
            None => errors.push(SchemaError::at(path, "must be an object")),
        }
        path.pop();
    }

    if let Some(palette) = required(root, "Palette", path, errors) {
        path.push(SchemaPathElem::Field("Palette"));
        match palette.as_object() {
            Some(obj) => {
                for (key, value) in obj {
                    if !value.is_string() {
                        path.push(SchemaPathElem::Key(key.clone()));
                        errors.push(SchemaError::at(path, "palette value must be a string"));
                        path.pop();
                    }
                }
            }
            None => errors.push(SchemaError::at(path, "must be an object")),
        }
        path.pop();
    }
}

fn validate_figure(item: &Value, path: &mut Vec<SchemaPathElem>, errors: &mut Vec<SchemaError>) {
    let Some(obj) = item.as_object() else {
        errors.push(SchemaError::at(path, "figure must be an object"));
        return;
    };

    let Some(kind) = required(obj, "type", path, errors) else {
        return;
    };
    let Some(kind) = kind.as_str().filter(|k| FIGURE_TYPES.contains(k)) else {
        path.push(SchemaPathElem::Field("type"));
        errors.push(SchemaError::at(
            path,
            format!("must be one of {}", FIGURE_TYPES.join(", ")),
        ));
        path.pop();
        return;
    };

    if obj.get("color").is_some_and(|c| !c.is_string()) {
        path.push(SchemaPathElem::Field("color"));
        errors.push(SchemaError::at(path, "must be a string"));
        path.pop();
    }

    match kind {
        "point" => {
            required_int(obj, "x", path, errors);
            required_int(obj, "y", path, errors);
        }
        "rectangle" => {
            required_int(obj, "x", path, errors);
            required_int(obj, "y", path, errors);
            positive_int(obj, "width", path, errors);
            positive_int(obj, "height", path, errors);
        }
        "square" => {
            required_int(obj, "x", path, errors);
            required_int(obj, "y", path, errors);
            positive_int(obj, "size", path, errors);
        }
        "circle" => {
            required_int(obj, "x", path, errors);
            required_int(obj, "y", path, errors);
            positive_int(obj, "radius", path, errors);
        }
        _ => validate_points(obj, path, errors),
    }
}

fn validate_points(
    obj: &Map<String, Value>,
    path: &mut Vec<SchemaPathElem>,
    errors: &mut Vec<SchemaError>,
) {
    let Some(points) = required(obj, "points", path, errors) else {
        return;
    };
    path.push(SchemaPathElem::Field("points"));
    match points.as_array() {
        Some(items) if items.len() >= 3 => {
            for (i, p) in items.iter().enumerate() {
                let is_pair = p
                    .as_array()
                    .is_some_and(|xy| xy.len() == 2 && xy.iter().all(is_integer));
                if !is_pair {
                    path.push(SchemaPathElem::Index(i));
                    errors.push(SchemaError::at(path, "point must be an [x, y] integer pair"));
                    path.pop();
                }
            }
        }
        Some(items) => errors.push(SchemaError::at(
            path,
            format!("must have at least 3 points, got {}", items.len()),
        )),
        None => errors.push(SchemaError::at(path, "must be an array")),
    }
    path.pop();
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    path: &[SchemaPathElem],
    errors: &mut Vec<SchemaError>,
) -> Option<&'a Value> {
    let v = obj.get(field);
    if v.is_none() {
        errors.push(SchemaError::at(
            path,
            format!("missing required field '{field}'"),
        ));
    }
    v
}

fn required_string(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &mut Vec<SchemaPathElem>,
    errors: &mut Vec<SchemaError>,
) {
    if let Some(v) = required(obj, field, path, errors)
        && !v.is_string()
    {
        path.push(SchemaPathElem::Field(field));
        errors.push(SchemaError::at(path, "must be a string"));
        path.pop();
    }
}

fn required_int(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &mut Vec<SchemaPathElem>,
    errors: &mut Vec<SchemaError>,
) {
    if let Some(v) = required(obj, field, path, errors)
        && !is_integer(v)
    {
        path.push(SchemaPathElem::Field(field));
        errors.push(SchemaError::at(path, "must be an integer"));
        path.pop();
    }
}

fn positive_int(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &mut Vec<SchemaPathElem>,
    errors: &mut Vec<SchemaError>,
) {
    let Some(v) = required(obj, field, path, errors) else {
        return;
    };
    let msg = match v.as_i64() {
        Some(n) if (1..=i64::from(u32::MAX)).contains(&n) => return,
        Some(_) => "must be an integer >= 1 that fits in 32 bits",
        None => "must be an integer",
    };
    path.push(SchemaPathElem::Field(field));
    errors.push(SchemaError::at(path, msg));
    path.pop();
}

// Integers only: `1.0` is a float in the document model.
fn is_integer(v: &Value) -> bool {
    v.is_i64()
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
