//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files next to this
//! module, so they can be edited and diffed without touching Rust code. They are embedded here
//! as string constants.
//!
//! Conventions:
//!
//! 1. Whitespace: the environment trims the newline after a block tag and strips leading
//!    whitespace before one (`trim_blocks`, `lstrip_blocks`), so every line of text in a
//!    template is exactly one line of output. Blank lines in the output are blank lines in the
//!    template.
//! 2. Styles: templates only name styles through the `style` filter. Which style a value gets
//!    is decided by the data (`message.style`), not by conditionals in the template.
//! 3. Layout: anything width related (padding, column fitting, highlighting) is done in Rust
//!    before the data reaches the template.

pub const ENTRY_TEMPLATE: &str = include_str!("templates/entry.tmp");
pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");

/// Template names as registered in the renderer's environment.
pub mod names {
    pub const ENTRY: &str = "entry";
    pub const LISTING: &str = "listing";
    pub const MESSAGES: &str = "messages";
    pub const BANNER: &str = "banner";
}

/// All templates, by registered name.
pub const ALL: &[(&str, &str)] = &[
    (names::ENTRY, ENTRY_TEMPLATE),
    (names::LISTING, LISTING_TEMPLATE),
    (names::MESSAGES, MESSAGES_TEMPLATE),
    (names::BANNER, BANNER_TEMPLATE),
];
