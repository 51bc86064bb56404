// file: src/models/platform.rs
// description: supported marketplace identifiers
// reference: marketplace listing targets

use crate::error::LensError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Walmart,
    Etsy,
    Tiktok,
    Shopify,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Amazon,
        Platform::Walmart,
        Platform::Etsy,
        Platform::Tiktok,
        Platform::Shopify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Walmart => "walmart",
            Platform::Etsy => "etsy",
            Platform::Tiktok => "tiktok",
            Platform::Shopify => "shopify",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Walmart => "Walmart",
            Platform::Etsy => "Etsy",
            Platform::Tiktok => "TikTok Shop",
            Platform::Shopify => "Shopify",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amazon" => Ok(Platform::Amazon),
            "walmart" => Ok(Platform::Walmart),
            "etsy" => Ok(Platform::Etsy),
            "tiktok" | "tiktok_shop" | "tiktok-shop" | "tiktok shop" => Ok(Platform::Tiktok),
            "shopify" => Ok(Platform::Shopify),
            _ => Err(LensError::UnknownPlatform(s.to_string())),
        }
    }
}
