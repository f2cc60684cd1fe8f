//! Format template compilation and record rendering
//!
//! A format template is a string of literal text and `%{...}` placeholders.
//! [`CompiledFormat::compile`] translates it once into a segment list bound
//! to record fields, plus the time layout extracted from a `%{time:layout}`
//! argument. Compilation never fails: malformed input degrades to literal
//! text or drops out, by fixed rules covered in the tests below.

use super::record::Record;
use std::fmt::Write as _;

/// Template used when no custom format has been set.
pub const DEFAULT_TEMPLATE: &str = "#%{id} %{time} %{filename}:%{line} ▶ %{lvl} %{message}";

/// Time layout used when a template carries no `time` sub-format
/// (chrono strftime syntax).
pub const DEFAULT_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

// Shortest complete placeholder is "%{message}"; anything shorter cannot
// contain one and falls back to the defaults.
const MIN_TEMPLATE_LEN: usize = 10;

/// A record field a placeholder resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Time,
    Module,
    Filename,
    Line,
    Level,
    LevelAbbrev,
    Message,
    Category,
}

impl Field {
    /// The fixed placeholder vocabulary. Unknown names resolve to `None`
    /// and contribute nothing to the compiled template.
    fn lookup(name: &str) -> Option<Field> {
        match name {
            "id" => Some(Field::Id),
            "time" => Some(Field::Time),
            "module" => Some(Field::Module),
            "filename" | "file" => Some(Field::Filename),
            "line" => Some(Field::Line),
            "level" => Some(Field::Level),
            "lvl" => Some(Field::LevelAbbrev),
            "message" => Some(Field::Message),
            "category" => Some(Field::Category),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A format template compiled for rendering.
///
/// Each field segment binds exactly one [`Record`] field, so a template that
/// references only some fields never touches the rest and rendering cannot
/// produce arity-mismatch artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    segments: Vec<Segment>,
    time_layout: String,
}

impl CompiledFormat {
    /// Compile a format template.
    ///
    /// Scanning rules:
    /// - literal text is copied through, including any `%` not followed
    ///   by `{` (the `%` is kept and the scan advances one byte);
    /// - `%{name}` and `%{name:arg}` runs are resolved through the
    ///   placeholder table; unknown names are dropped, argument included;
    /// - a non-empty `arg` on `%{time:...}` becomes the time layout;
    /// - `%{` with no closing `}` ends the scan, dropping the remainder;
    /// - a second `%{` opening before the first `}` turns the dangling
    ///   `%{` into a literal `%`, preserving the better-formed placeholder
    ///   that follows.
    ///
    /// Compiling is a pure function of its input; templates shorter than
    /// the smallest complete placeholder yield the built-in default.
    pub fn compile(template: &str) -> Self {
        if template.len() < MIN_TEMPLATE_LEN {
            return Self::default();
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut time_layout = DEFAULT_TIME_LAYOUT.to_string();
        let mut rest = template;

        while let Some(idx) = rest.find('%') {
            literal.push_str(&rest[..idx]);
            rest = &rest[idx..];

            if !rest[1..].starts_with('{') {
                // Stray percent, kept as literal text.
                literal.push('%');
                rest = &rest[1..];
                continue;
            }

            let Some(close) = rest.find('}') else {
                // Unterminated placeholder swallows the remainder.
                rest = "";
                break;
            };

            if let Some(next) = rest[1..].find("%{") {
                if next + 1 < close {
                    // This "%{" never closes before the next one opens;
                    // demote it to a literal percent and rescan from the
                    // brace so the following placeholder survives.
                    literal.push('%');
                    rest = &rest[1..];
                    continue;
                }
            }

            let inner = &rest[2..close];
            let (name, arg) = match inner.find(':') {
                Some(colon) => (&inner[..colon], &inner[colon + 1..]),
                None => (inner, ""),
            };

            if let Some(field) = Field::lookup(name) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
                if field == Field::Time && !arg.is_empty() {
                    time_layout = arg.to_string();
                }
            }
            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            segments,
            time_layout,
        }
    }

    /// The time layout this template selects for formatting record
    /// timestamps.
    pub fn time_layout(&self) -> &str {
        &self.time_layout
    }

    /// Render a record through the compiled segments.
    pub fn render(&self, record: &Record) -> String {
        let mut out = String::with_capacity(64 + record.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Id) => {
                    let _ = write!(out, "{}", record.id);
                }
                Segment::Field(Field::Time) => out.push_str(&record.time),
                Segment::Field(Field::Module) => out.push_str(&record.module),
                Segment::Field(Field::Filename) => out.push_str(&record.filename),
                Segment::Field(Field::Line) => {
                    let _ = write!(out, "{}", record.line);
                }
                Segment::Field(Field::Level) => out.push_str(record.level.to_str()),
                Segment::Field(Field::LevelAbbrev) => out.push_str(record.level.abbrev()),
                Segment::Field(Field::Message) => out.push_str(&record.message),
                Segment::Field(Field::Category) => out.push_str(&record.category),
            }
        }
        out
    }
}

impl Default for CompiledFormat {
    fn default() -> Self {
        Self::compile(DEFAULT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;

    fn sample_record() -> Record {
        Record {
            id: 1,
            time: "2024-01-01 00:00:00".to_string(),
            module: "DEFAULT".to_string(),
            level: Severity::Warning,
            filename: "main.rs".to_string(),
            line: 42,
            message: "hello".to_string(),
            category: "core".to_string(),
        }
    }

    #[test]
    fn test_default_template_render() {
        let compiled = CompiledFormat::default();
        assert_eq!(
            compiled.render(&sample_record()),
            "#1 2024-01-01 00:00:00 main.rs:42 ▶ WAR hello"
        );
    }

    #[test]
    fn test_all_placeholders_roundtrip() {
        let compiled = CompiledFormat::compile(
            "%{id}|%{time}|%{module}|%{file}|%{filename}|%{line}|%{level}|%{lvl}|%{message}|%{category}",
        );
        assert_eq!(
            compiled.render(&sample_record()),
            "1|2024-01-01 00:00:00|DEFAULT|main.rs|main.rs|42|WARNING|WAR|hello|core"
        );
    }

    #[test]
    fn test_unknown_placeholder_dropped() {
        let compiled = CompiledFormat::compile("pre %{bogus} post");
        assert_eq!(compiled.render(&sample_record()), "pre  post");
    }

    #[test]
    fn test_unknown_placeholder_with_argument_dropped() {
        let compiled = CompiledFormat::compile("x %{bogus:42} y");
        assert_eq!(compiled.render(&sample_record()), "x  y");
    }

    #[test]
    fn test_empty_placeholder_dropped() {
        let compiled = CompiledFormat::compile("ab %{} cd %{id}");
        assert_eq!(compiled.render(&sample_record()), "ab  cd 1");
    }

    #[test]
    fn test_stray_percent_is_literal() {
        let compiled = CompiledFormat::compile("%{module} 50% off");
        assert_eq!(compiled.render(&sample_record()), "DEFAULT 50% off");
    }

    #[test]
    fn test_trailing_percent_is_literal() {
        let compiled = CompiledFormat::compile("%{module} 100%");
        assert_eq!(compiled.render(&sample_record()), "DEFAULT 100%");
    }

    #[test]
    fn test_double_percent_is_two_literals() {
        // "%%" is not an escape; each percent passes through on its own.
        let compiled = CompiledFormat::compile("%{module} 100%%");
        assert_eq!(compiled.render(&sample_record()), "DEFAULT 100%%");
    }

    #[test]
    fn test_unterminated_placeholder_drops_remainder() {
        let compiled = CompiledFormat::compile("prefix %{bad message");
        assert_eq!(compiled.render(&sample_record()), "prefix ");
    }

    #[test]
    fn test_unterminated_after_valid_placeholder() {
        let compiled = CompiledFormat::compile("%{message} tail %{oops");
        assert_eq!(compiled.render(&sample_record()), "hello tail ");
    }

    #[test]
    fn test_dangling_open_before_wellformed_placeholder() {
        let compiled = CompiledFormat::compile("x %{bad %{message}");
        assert_eq!(compiled.render(&sample_record()), "x %{bad hello");
    }

    #[test]
    fn test_time_argument_overrides_layout() {
        let compiled = CompiledFormat::compile("%{time:%H:%M}");
        // Split happens at the first colon; the rest is the layout verbatim.
        assert_eq!(compiled.time_layout(), "%H:%M");
    }

    #[test]
    fn test_empty_time_argument_keeps_default_layout() {
        let compiled = CompiledFormat::compile("%{time:} %{id}");
        assert_eq!(compiled.time_layout(), DEFAULT_TIME_LAYOUT);
    }

    #[test]
    fn test_no_time_placeholder_keeps_default_layout() {
        let compiled = CompiledFormat::compile("%{id} %{message}");
        assert_eq!(compiled.time_layout(), DEFAULT_TIME_LAYOUT);
    }

    #[test]
    fn test_argument_on_non_time_placeholder_ignored() {
        let compiled = CompiledFormat::compile("%{module:xyz} %{id}");
        assert_eq!(compiled.render(&sample_record()), "DEFAULT 1");
        assert_eq!(compiled.time_layout(), DEFAULT_TIME_LAYOUT);
    }

    #[test]
    fn test_short_template_falls_back_to_default() {
        assert_eq!(CompiledFormat::compile(""), CompiledFormat::default());
        assert_eq!(CompiledFormat::compile("%{id}"), CompiledFormat::default());
    }

    #[test]
    fn test_literal_only_template() {
        let compiled = CompiledFormat::compile("plain text, nothing else");
        assert_eq!(compiled.render(&sample_record()), "plain text, nothing else");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let template = "a %{bad %{time:%H} %% %{lvl} %{unknown} tail %{x";
        assert_eq!(
            CompiledFormat::compile(template),
            CompiledFormat::compile(template)
        );
    }
}
