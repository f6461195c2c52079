//! Text processing stages: normalization, rewrites, segmentation,
//! transliteration, sanitization, fallback generation

mod chars;
mod fallback;
mod hash;
mod normalize;
mod rewrite;
mod sanitize;
mod segment;
mod translit;

pub use chars::{is_letter_or_number, is_mark};
pub use fallback::fallback_slug;
pub use hash::{HASH_LEN, SlugHash, hash_base36};
pub use normalize::{collapse_whitespace, normalize};
pub use rewrite::{EmojiRewrite, fuse_dotted_tech, rewrite_emoji, rewrite_symbols, rewrite_tech};
pub use sanitize::{
    collapse_separators, contains_path_separator, is_unusable, replace_path_separators,
    sanitize_strict, truncate_at_boundary,
};
#[cfg(feature = "segmentation")]
pub use segment::UnicodeWordSegmenter;
pub use segment::{
    RunSegmenter, WhitespaceSegmenter, WordSegmenter, active_segmenter, fallback_segmenter,
};
pub use translit::{Transliteration, transliterate};
