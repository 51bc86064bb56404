// file: src/parser/mod.rs
// description: listing field parsing module exports
// reference: internal module structure

pub mod bullets;
pub mod keywords;
pub mod patterns;
pub mod section;
pub mod text;

pub use bullets::{split_bullets, strip_bullet_prefix};
pub use keywords::{classify_keywords, split_keyword_value, split_keywords, split_tags};
pub use patterns::strip_html;
pub use section::{parse_section, section_from_value};
pub use text::{parse_faqs, split_video_scripts};
