use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;

/// Resource collections the dashboard manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Billboard,
    Category,
    Product,
    Size,
    Color,
}

impl ResourceKind {
    /// URL path segment for the collection, e.g. `/api/{store}/billboards`
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Billboard => "billboards",
            Self::Category => "categories",
            Self::Product => "products",
            Self::Size => "sizes",
            Self::Color => "colors",
        }
    }

    /// Capitalized singular used in headings and toasts
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Billboard => "Billboard",
            Self::Category => "Category",
            Self::Product => "Product",
            Self::Size => "Size",
            Self::Color => "Color",
        }
    }

    /// Lowercase singular used mid-sentence ("Edit billboard")
    pub fn singular(self) -> &'static str {
        match self {
            Self::Billboard => "billboard",
            Self::Category => "category",
            Self::Product => "product",
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments_are_plural() {
        assert_eq!(ResourceKind::Category.path_segment(), "categories");
        assert_eq!(ResourceKind::Billboard.path_segment(), "billboards");
    }

    #[test]
    fn test_kind_display_lowercase() {
        assert_eq!(ResourceKind::Billboard.to_string(), "billboard");
        assert_eq!(
            "product".parse::<ResourceKind>().unwrap(),
            ResourceKind::Product
        );
    }
}
