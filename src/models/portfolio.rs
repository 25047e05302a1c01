use serde::{Deserialize, Deserializer, Serialize};

/// The site owner. Missing fields load as empty values and render as empty text.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Designer {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub experience: String,
    pub email: String,
    pub behance: String,
    pub location: String,
    pub availability: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "display_string")]
    pub year: String,
    #[serde(default)]
    pub client: String,
    /// First entry is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Project {
    pub fn cover_image(&self) -> &str {
        self.images.first().map(|s| s.as_str()).unwrap_or("")
    }
}

/// The document served by `/api/portfolio`.
/// Any JSON object loads; an error body such as `{"detail": ...}` yields an
/// empty designer and no project list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Portfolio {
    pub designer: Designer,
    pub projects: Option<Vec<Project>>,
}

impl Portfolio {
    /// The project list, empty when the document carried none.
    pub fn project_list(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or(&[])
    }
}

/// Accept a number or a string for display-only fields like `year`.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
