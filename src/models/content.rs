use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    #[serde(rename = "primaryCta")]
    pub primary_cta: &'static str,
    #[serde(rename = "secondaryCta")]
    pub secondary_cta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Office {
    pub city: &'static str,
    pub region: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub brand: Brand,
    pub stats: Vec<Stat>,
    pub offices: Vec<Office>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    #[serde(rename = "publishedAt")]
    pub published_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Links of the form `/#section` point at an anchor on the home page.
    pub fn is_section(&self) -> bool {
        self.href.starts_with("/#")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Workshop {
    pub title: &'static str,
    pub duration: &'static str,
    pub topics: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
}

/// A physical office shown on the offices page.
#[derive(Debug, Clone, Serialize)]
pub struct OfficeAddress {
    pub country: &'static str,
    pub address: &'static str,
}
