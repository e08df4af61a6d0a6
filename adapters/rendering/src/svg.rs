//! Painting of `<path>` elements inside an SVG document.

use choropleth_core::Fips;

use crate::{format_value, MapFrame};

const PATH_TAG: &str = "<path";
const REPLACED: [&str; 2] = ["fill", "data-value"];

/// Paints every `<path>` whose `id` matches a region of the frame.
///
/// Matching paths get their `fill` replaced by the region color and a
/// `data-value` attribute holding the displayed value. Everything else in the
/// document is copied unchanged.
#[must_use]
pub fn paint_svg(svg: &str, frame: &MapFrame) -> String {
    let mut painted = String::with_capacity(svg.len() + frame.regions.len() * 40);
    let mut rest = svg;

    while let Some(start) = find_path_tag(rest) {
        let (before, tail) = rest.split_at(start);
        painted.push_str(before);

        let Some(end) = tag_end(tail) else {
            rest = tail;
            break;
        };
        let (tag, after) = tail.split_at(end + 1);
        rest = after;

        let (body, closing) = match tag.strip_suffix("/>") {
            Some(body) => (body, "/>"),
            None => (&tag[..tag.len() - 1], ">"),
        };
        let body = &body[PATH_TAG.len()..];
        let attributes = parse_attributes(body);

        let region = attributes
            .iter()
            .find(|attribute| attribute.name == "id")
            .and_then(|attribute| attribute.value)
            .and_then(|id| frame.region(&Fips::new(id)));
        let Some(region) = region else {
            painted.push_str(tag);
            continue;
        };

        painted.push_str(PATH_TAG);
        for attribute in attributes
            .iter()
            .filter(|attribute| !REPLACED.contains(&attribute.name))
        {
            painted.push(' ');
            painted.push_str(attribute.text);
        }
        painted.push_str(&format!(
            " fill=\"{}\" data-value=\"{}\"",
            region.color,
            format_value(region.value)
        ));
        painted.push_str(closing);
    }

    painted.push_str(rest);
    painted
}

fn find_path_tag(text: &str) -> Option<usize> {
    text.match_indices(PATH_TAG)
        .map(|(index, _)| index)
        .find(|index| {
            text[index + PATH_TAG.len()..]
                .chars()
                .next()
                .is_some_and(|next| next.is_whitespace() || next == '/' || next == '>')
        })
}

/// Offset of the `>` closing the tag at the start of `text`, skipping quoted values.
fn tag_end(text: &str) -> Option<usize> {
    let mut quote = None;
    for (index, byte) in text.bytes().enumerate() {
        match (quote, byte) {
            (Some(open), _) if byte == open => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'>') => return Some(index),
            (None, _) => {}
        }
    }
    None
}

#[derive(Debug, PartialEq)]
struct Attribute<'a> {
    name: &'a str,
    value: Option<&'a str>,
    text: &'a str,
}

fn parse_attributes(body: &str) -> Vec<Attribute<'_>> {
    let mut attributes = Vec::new();
    let mut cursor = 0;
    let bytes = body.as_bytes();

    loop {
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor >= bytes.len() {
            break;
        }

        let start = cursor;
        while cursor < bytes.len()
            && !bytes[cursor].is_ascii_whitespace()
            && bytes[cursor] != b'='
        {
            cursor += 1;
        }
        let name = &body[start..cursor];

        let mut value = None;
        if cursor < bytes.len() && bytes[cursor] == b'=' {
            cursor += 1;
            match bytes.get(cursor) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    let value_start = cursor + 1;
                    let value_end = body[value_start..]
                        .find(char::from(quote))
                        .map_or(bytes.len(), |offset| value_start + offset);
                    value = Some(&body[value_start..value_end]);
                    cursor = (value_end + 1).min(bytes.len());
                }
                _ => {
                    let value_start = cursor;
                    while cursor < bytes.len() && !bytes[cursor].is_ascii_whitespace() {
                        cursor += 1;
                    }
                    value = Some(&body[value_start..cursor]);
                }
            }
        }

        attributes.push(Attribute {
            name,
            value,
            text: &body[start..cursor],
        });
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::{paint_svg, parse_attributes, Attribute};
    use crate::{MapFrame, RegionFill};
    use choropleth_core::{Color, ColorScale, DisplayMode, Fips, StateCode};

    fn frame() -> MapFrame {
        MapFrame {
            year: 1959,
            mode: DisplayMode::Ratio,
            scale: ColorScale::Binned,
            regions: vec![
                RegionFill {
                    state: StateCode::new("AL"),
                    fips: Fips::new("01"),
                    value: Some(0.72),
                    color: Color::from_rgb(0x12, 0x34, 0x56),
                },
                RegionFill {
                    state: StateCode::new("CT"),
                    fips: Fips::new("09"),
                    value: None,
                    color: Color::from_rgb(0xd3, 0xd3, 0xd3),
                },
            ],
        }
    }

    #[test]
    fn matching_paths_are_filled() {
        let svg = r#"<svg><path id="01" d="M0 0L1 1"/></svg>"#;
        assert_eq!(
            paint_svg(svg, &frame()),
            r##"<svg><path id="01" d="M0 0L1 1" fill="#123456" data-value="0.72"/></svg>"##
        );
    }

    #[test]
    fn existing_fill_is_replaced() {
        let svg = r##"<path fill="#000" id='09' class="state" data-value="3"></path>"##;
        assert_eq!(
            paint_svg(svg, &frame()),
            r##"<path id='09' class="state" fill="#d3d3d3" data-value="null"></path>"##
        );
    }

    #[test]
    fn unknown_paths_and_other_elements_are_untouched() {
        let svg = r#"<svg><g id="01"/><path id="02" fill="red"/><pathology/></svg>"#;
        assert_eq!(paint_svg(svg, &frame()), svg);
    }

    #[test]
    fn angle_brackets_inside_values_do_not_end_the_tag() {
        let svg = r#"<path id="01" aria-label="a > b" d="M0 0L1 1"/><path title='x>y'/>"#;
        assert_eq!(
            paint_svg(svg, &frame()),
            r##"<path id="01" aria-label="a > b" d="M0 0L1 1" fill="#123456" data-value="0.72"/><path title='x>y'/>"##
        );
    }

    #[test]
    fn unterminated_tag_is_copied_verbatim() {
        let svg = r#"<svg><path id="01""#;
        assert_eq!(paint_svg(svg, &frame()), svg);
        let open_quote = r#"<svg><path id="01" d="M0 0>"#;
        assert_eq!(paint_svg(open_quote, &frame()), open_quote);
    }

    #[test]
    fn attributes_keep_their_original_text() {
        let attributes = parse_attributes(r#" id="01"  d='M 0 0' hidden stroke=none"#);
        assert_eq!(
            attributes,
            vec![
                Attribute {
                    name: "id",
                    value: Some("01"),
                    text: r#"id="01""#,
                },
                Attribute {
                    name: "d",
                    value: Some("M 0 0"),
                    text: "d='M 0 0'",
                },
                Attribute {
                    name: "hidden",
                    value: None,
                    text: "hidden",
                },
                Attribute {
                    name: "stroke",
                    value: Some("none"),
                    text: "stroke=none",
                },
            ]
        );
    }
}
