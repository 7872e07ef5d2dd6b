//! Course catalog shown on the dashboard.
//!
//! The catalog itself is presentational content; the state machine only
//! cares about course titles (panel identifiers) and which title comes
//! first, since that one seeds the expanded set after login.

/// A single course entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered list of courses.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Title of the first course, used to seed the expanded panels.
    pub fn first_title(&self) -> Option<&str> {
        self.courses.first().map(|course| course.title.as_str())
    }
}

/// The stock portal catalog.
pub fn default_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        Course::new(
            "Website Development",
            "Learn modern frontend and backend techniques for building responsive, \
             performant websites with real-world tooling.",
        ),
        Course::new(
            "DevOps",
            "Master CI/CD pipelines, infrastructure as code, and automation practices \
             that keep engineering teams shipping quickly.",
        ),
        Course::new(
            "Cybersecurity",
            "Understand threat modeling, secure coding, and incident response to defend \
             applications and infrastructure.",
        ),
        Course::new(
            "Data Science",
            "Explore data pipelines, analytics, and machine learning workflows that \
             unlock insights for modern businesses.",
        ),
    ])
}
