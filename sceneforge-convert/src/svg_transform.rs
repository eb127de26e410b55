//! SVG `transform` attribute algebra.
//!
//! Parses the `name(args)` command grammar into an ordered command list,
//! composes translations, and approximates bounding-box effects. Parsing is
//! lenient: unknown command names and unparsable numeric tokens never error -
//! they are dropped from the command list and recorded in
//! [`ParsedTransform::ignored`] so callers and tests can observe the loss.

use serde::{Deserialize, Serialize};

/// One command of a `transform` attribute, carrying only its own parameters.
///
/// Produced fresh per attribute string and discarded after use; commands are
/// never persisted in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransformCommand {
    /// `translate(tx, ty=0)`.
    Translate {
        /// X shift.
        tx: f32,
        /// Y shift.
        ty: f32,
    },
    /// `rotate(angle, cx=0, cy=0)`.
    Rotate {
        /// Angle in degrees.
        angle: f32,
        /// Rotation center X.
        cx: f32,
        /// Rotation center Y.
        cy: f32,
    },
    /// `scale(sx, sy=sx)` - single-argument scale is uniform.
    Scale {
        /// X scale factor.
        sx: f32,
        /// Y scale factor.
        sy: f32,
    },
    /// `skewX(angle)`.
    SkewX {
        /// Skew angle in degrees.
        angle: f32,
    },
    /// `skewY(angle)`.
    SkewY {
        /// Skew angle in degrees.
        angle: f32,
    },
    /// `matrix(a, b, c, d, e, f)` - missing arguments default to identity.
    Matrix {
        /// Matrix `a` component.
        a: f32,
        /// Matrix `b` component.
        b: f32,
        /// Matrix `c` component.
        c: f32,
        /// Matrix `d` component.
        d: f32,
        /// Matrix `e` (tx) component.
        e: f32,
        /// Matrix `f` (ty) component.
        f: f32,
    },
}

/// The result of parsing one `transform` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTransform {
    /// Recognized commands in attribute order.
    pub commands: Vec<TransformCommand>,
    /// Dropped input: unknown command names (as `name(args)`), numeric
    /// tokens that failed to parse, truncated commands with no closing
    /// paren, and parenthesized groups with no command name.
    pub ignored: Vec<String>,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Box width (non-negative).
    pub width: f32,
    /// Box height (non-negative).
    pub height: f32,
}

impl Bounds {
    /// Create a bounding box.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A summed translation offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    /// Total X shift.
    pub x: f32,
    /// Total Y shift.
    pub y: f32,
}

/// Parse a `transform` attribute string.
///
/// Scans for `name(args)` tokens leniently; text between tokens is skipped,
/// and malformed token shapes are recorded in [`ParsedTransform::ignored`].
/// Empty input yields an empty result. Never errors.
#[must_use]
pub fn parse_transform(text: &str) -> ParsedTransform {
    let mut parsed = ParsedTransform::default();
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            // Truncated command with no closing paren.
            parsed.ignored.push(rest.trim().to_string());
            break;
        };
        let name = trailing_identifier(&rest[..open]);
        let args_text = &rest[open + 1..open + close];
        if name.is_empty() {
            parsed.ignored.push(format!("({args_text})"));
        } else {
            push_command(name, args_text, &mut parsed);
        }
        rest = &rest[open + close + 1..];
    }

    parsed
}

/// The trailing run of word characters before a `(`.
fn trailing_identifier(text: &str) -> &str {
    let start = text
        .rfind(|c: char| !c.is_alphanumeric() && c != '_')
        .map_or(0, |i| i + c_len(text, i));
    &text[start..]
}

fn c_len(text: &str, index: usize) -> usize {
    text[index..].chars().next().map_or(1, char::len_utf8)
}

/// Split an argument list on whitespace and/or commas, keeping numeric
/// tokens and recording the rest as ignored.
fn parse_args(args_text: &str, ignored: &mut Vec<String>) -> Vec<f32> {
    args_text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            token.parse().map_or_else(
                |_| {
                    tracing::debug!(token, "dropping unparsable transform argument");
                    ignored.push(token.to_string());
                    None
                },
                Some,
            )
        })
        .collect()
}

fn push_command(name: &str, args_text: &str, parsed: &mut ParsedTransform) {
    let mut ignored_args = Vec::new();
    let args = parse_args(args_text, &mut ignored_args);
    let arg = |i: usize, default: f32| args.get(i).copied().unwrap_or(default);

    let command = match name {
        "translate" if !args.is_empty() => Some(TransformCommand::Translate {
            tx: args[0],
            ty: arg(1, 0.0),
        }),
        "rotate" if !args.is_empty() => Some(TransformCommand::Rotate {
            angle: args[0],
            cx: arg(1, 0.0),
            cy: arg(2, 0.0),
        }),
        "scale" if !args.is_empty() => Some(TransformCommand::Scale {
            sx: args[0],
            sy: arg(1, args[0]),
        }),
        "skewX" | "skewx" if !args.is_empty() => Some(TransformCommand::SkewX { angle: args[0] }),
        "skewY" | "skewy" if !args.is_empty() => Some(TransformCommand::SkewY { angle: args[0] }),
        "matrix" => Some(TransformCommand::Matrix {
            a: arg(0, 1.0),
            b: arg(1, 0.0),
            c: arg(2, 0.0),
            d: arg(3, 1.0),
            e: arg(4, 0.0),
            f: arg(5, 0.0),
        }),
        "translate" | "rotate" | "scale" | "skewX" | "skewx" | "skewY" | "skewy" => None,
        _ => {
            tracing::debug!(name, "dropping unrecognized transform command");
            parsed.ignored.push(format!("{name}({args_text})"));
            parsed.ignored.extend(ignored_args);
            return;
        }
    };

    parsed.ignored.extend(ignored_args);
    match command {
        Some(command) => parsed.commands.push(command),
        // A recognized command with no usable required argument is dropped.
        None => parsed.ignored.push(format!("{name}({args_text})")),
    }
}

/// Fold commands over a bounding box, left to right.
///
/// `translate` shifts `x`/`y`. `scale` multiplies `x`/`y`/`width`/`height`
/// and takes the absolute value of the resulting extents, so a negative
/// scale flips position signs but never produces a negative size.
/// `rotate`/`skewX`/`skewY`/`matrix` pass the bounds through unchanged: the
/// engine deliberately does not compute rotated bounding boxes, trading
/// fidelity for a cheap axis-aligned approximation.
#[must_use]
pub fn transformed_bounds(bounds: Bounds, commands: &[TransformCommand]) -> Bounds {
    commands.iter().fold(bounds, |acc, command| match command {
        TransformCommand::Translate { tx, ty } => Bounds {
            x: acc.x + tx,
            y: acc.y + ty,
            ..acc
        },
        TransformCommand::Scale { sx, sy } => Bounds {
            x: acc.x * sx,
            y: acc.y * sy,
            width: (acc.width * sx).abs(),
            height: (acc.height * sy).abs(),
        },
        TransformCommand::Rotate { .. }
        | TransformCommand::SkewX { .. }
        | TransformCommand::SkewY { .. }
        | TransformCommand::Matrix { .. } => acc,
    })
}

/// Sum `tx`/`ty` across `translate` commands only.
///
/// A cheap position approximation for composing nested groups without full
/// matrix multiplication; every other command type is ignored.
#[must_use]
pub fn extract_translation(commands: &[TransformCommand]) -> Translation {
    commands
        .iter()
        .fold(Translation::default(), |acc, command| match command {
            TransformCommand::Translate { tx, ty } => Translation {
                x: acc.x + tx,
                y: acc.y + ty,
            },
            _ => acc,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let parsed = parse_transform("");
        assert!(parsed.commands.is_empty());
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn test_translate_and_rotate_order_preserved() {
        let parsed = parse_transform("translate(10, 20) rotate(45)");
        assert_eq!(
            parsed.commands,
            vec![
                TransformCommand::Translate { tx: 10.0, ty: 20.0 },
                TransformCommand::Rotate {
                    angle: 45.0,
                    cx: 0.0,
                    cy: 0.0
                },
            ]
        );
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn test_space_separated_args() {
        let parsed = parse_transform("translate(10 20)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 10.0, ty: 20.0 }]
        );
    }

    #[test]
    fn test_translate_defaults_ty() {
        let parsed = parse_transform("translate(10)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 10.0, ty: 0.0 }]
        );
    }

    #[test]
    fn test_single_argument_scale_is_uniform() {
        let parsed = parse_transform("scale(2)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Scale { sx: 2.0, sy: 2.0 }]
        );
    }

    #[test]
    fn test_matrix_defaults_to_identity_components() {
        let parsed = parse_transform("matrix()");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Matrix {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: 1.0,
                e: 0.0,
                f: 0.0
            }]
        );
    }

    #[test]
    fn test_unknown_command_recorded_not_errored() {
        let parsed = parse_transform("spin(90) translate(5)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 5.0, ty: 0.0 }]
        );
        assert_eq!(parsed.ignored, vec!["spin(90)".to_string()]);
    }

    #[test]
    fn test_unparsable_tokens_recorded() {
        let parsed = parse_transform("translate(10, abc)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 10.0, ty: 0.0 }]
        );
        assert_eq!(parsed.ignored, vec!["abc".to_string()]);
    }

    #[test]
    fn test_truncated_command_recorded() {
        let parsed = parse_transform("translate(5) scale(2");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 5.0, ty: 0.0 }]
        );
        assert_eq!(parsed.ignored, vec!["scale(2".to_string()]);
    }

    #[test]
    fn test_bare_parenthesized_group_recorded() {
        let parsed = parse_transform("(10) translate(5)");
        assert_eq!(
            parsed.commands,
            vec![TransformCommand::Translate { tx: 5.0, ty: 0.0 }]
        );
        assert_eq!(parsed.ignored, vec!["(10)".to_string()]);
    }

    #[test]
    fn test_required_argument_missing_drops_command() {
        let parsed = parse_transform("rotate()");
        assert!(parsed.commands.is_empty());
        assert_eq!(parsed.ignored, vec!["rotate()".to_string()]);
    }

    #[test]
    fn test_extract_translation_ignores_other_commands() {
        let commands = vec![
            TransformCommand::Translate { tx: 10.0, ty: 20.0 },
            TransformCommand::Scale { sx: 2.0, sy: 2.0 },
            TransformCommand::Translate { tx: 5.0, ty: 10.0 },
        ];
        let t = extract_translation(&commands);
        assert!((t.x - 15.0).abs() < f32::EPSILON);
        assert!((t.y - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_translate_shifts_position() {
        let bounds = transformed_bounds(
            Bounds::new(10.0, 20.0, 100.0, 50.0),
            &[TransformCommand::Translate { tx: 5.0, ty: -5.0 }],
        );
        assert!((bounds.x - 15.0).abs() < f32::EPSILON);
        assert!((bounds.y - 15.0).abs() < f32::EPSILON);
        assert!((bounds.width - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_negative_scale_flips_position_not_size() {
        let bounds = transformed_bounds(
            Bounds::new(10.0, 20.0, 100.0, 50.0),
            &[TransformCommand::Scale { sx: -1.0, sy: 1.0 }],
        );
        assert!((bounds.x + 10.0).abs() < f32::EPSILON);
        assert!((bounds.y - 20.0).abs() < f32::EPSILON);
        assert!((bounds.width - 100.0).abs() < f32::EPSILON);
        assert!((bounds.height - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_rotate_passes_through() {
        let original = Bounds::new(10.0, 20.0, 100.0, 50.0);
        let bounds = transformed_bounds(
            original,
            &[TransformCommand::Rotate {
                angle: 45.0,
                cx: 0.0,
                cy: 0.0,
            }],
        );
        assert_eq!(bounds, original);
    }

    #[test]
    fn test_bounds_fold_left_to_right() {
        // translate then scale: position is scaled after the shift.
        let bounds = transformed_bounds(
            Bounds::new(10.0, 10.0, 10.0, 10.0),
            &[
                TransformCommand::Translate { tx: 10.0, ty: 0.0 },
                TransformCommand::Scale { sx: 2.0, sy: 2.0 },
            ],
        );
        assert!((bounds.x - 40.0).abs() < f32::EPSILON);
        assert!((bounds.width - 20.0).abs() < f32::EPSILON);
    }
}
