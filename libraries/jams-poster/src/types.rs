//! Poster domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Album metadata a poster is generated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    /// Album or track title
    pub title: String,
    /// Artist name
    pub artist: String,
}

impl AlbumInfo {
    /// Create album info
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Fixed set of poster layout templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterTemplate {
    /// Modern collage layout with overlapping elements
    Pinterest,
    /// Clean and simple with focus on typography
    Minimalist,
    /// Dynamic grid layout with multiple album arts
    Collage,
    /// Retro design with distressed textures
    Vintage,
    /// Sleek design with geometric patterns
    Modern,
}

/// Static configuration of one template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Aspect ratio label (e.g. "3:4")
    pub aspect_ratio: &'static str,
    /// Color palette; the first entry is the primary accent
    pub colors: [&'static str; 3],
}

impl PosterTemplate {
    /// All templates in catalogue order
    pub const ALL: [PosterTemplate; 5] = [
        PosterTemplate::Pinterest,
        PosterTemplate::Minimalist,
        PosterTemplate::Collage,
        PosterTemplate::Vintage,
        PosterTemplate::Modern,
    ];

    /// Template key for storage and display
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterTemplate::Pinterest => "pinterest",
            PosterTemplate::Minimalist => "minimalist",
            PosterTemplate::Collage => "collage",
            PosterTemplate::Vintage => "vintage",
            PosterTemplate::Modern => "modern",
        }
    }

    /// Parse a template key
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pinterest" => Some(PosterTemplate::Pinterest),
            "minimalist" => Some(PosterTemplate::Minimalist),
            "collage" => Some(PosterTemplate::Collage),
            "vintage" => Some(PosterTemplate::Vintage),
            "modern" => Some(PosterTemplate::Modern),
            _ => None,
        }
    }

    /// Static configuration for this template
    pub fn info(&self) -> TemplateInfo {
        match self {
            PosterTemplate::Pinterest => TemplateInfo {
                name: "Pinterest Style",
                description: "Modern collage layout with overlapping elements",
                aspect_ratio: "3:4",
                colors: ["#ef4444", "#f59e0b", "#10b981"],
            },
            PosterTemplate::Minimalist => TemplateInfo {
                name: "Minimalist",
                description: "Clean and simple with focus on typography",
                aspect_ratio: "2:3",
                colors: ["#000000", "#ffffff", "#6b7280"],
            },
            PosterTemplate::Collage => TemplateInfo {
                name: "Collage Style",
                description: "Dynamic grid layout with multiple album arts",
                aspect_ratio: "1:1",
                colors: ["#8b5cf6", "#06b6d4", "#f97316"],
            },
            PosterTemplate::Vintage => TemplateInfo {
                name: "Vintage",
                description: "Retro design with distressed textures",
                aspect_ratio: "4:5",
                colors: ["#d97706", "#dc2626", "#7c2d12"],
            },
            PosterTemplate::Modern => TemplateInfo {
                name: "Modern",
                description: "Sleek design with geometric patterns",
                aspect_ratio: "16:9",
                colors: ["#3b82f6", "#06b6d4", "#6366f1"],
            },
        }
    }
}

/// Export file formats; the written content is a placeholder label, not a
/// real rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterFormat {
    Png,
    Jpg,
    Pdf,
    Svg,
}

impl PosterFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            PosterFormat::Png => "png",
            PosterFormat::Jpg => "jpg",
            PosterFormat::Pdf => "pdf",
            PosterFormat::Svg => "svg",
        }
    }

    /// Uppercase label used in the placeholder export content
    pub fn label(&self) -> &'static str {
        match self {
            PosterFormat::Png => "PNG",
            PosterFormat::Jpg => "JPG",
            PosterFormat::Pdf => "PDF",
            PosterFormat::Svg => "SVG",
        }
    }
}

/// A generated poster descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poster {
    /// Unique poster identifier
    pub id: String,
    /// Template the poster was generated with
    pub template: PosterTemplate,
    /// Album metadata the poster was generated from
    pub album_data: AlbumInfo,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Placeholder preview as a base64 SVG data URL
    pub preview_url: String,
}
