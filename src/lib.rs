//! vitae assembles HTML resumes from templates.
//! A template is a set of HTML fragments containing `{{path}}` placeholders
//! and `{{#list}}...{{/list}}` blocks, plus styling fields that become CSS
//! variables. Assembly is pure and never fails: placeholders without data are
//! left in the output untouched.

/// Fragment assembly into a complete resume
pub mod assembler;

/// Block iteration over arrays (`{{#key}}...{{/key}}`)
pub mod blocks;

/// Command-line interface module for the vitae application
pub mod cli;

pub mod constants;

/// Standalone HTML page rendering using MiniJinja
pub mod document;

/// Error types and handling for the vitae application
pub mod error;

/// Template directories, listed and filtered like a gallery
pub mod library;

/// Template and resume data loading (JSON or YAML)
pub mod loader;

pub mod logger;

pub mod output;

/// Dotted-path lookup of placeholder values
pub mod resolver;

/// Built-in sample resume
pub mod sample;

/// CSS custom property block
pub mod style;

pub mod stringify;

/// Scalar placeholder substitution (`{{path}}`)
pub mod substitute;

/// Template records and categories
pub mod template;
