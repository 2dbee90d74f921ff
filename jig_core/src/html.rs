//! Markup reformatting for pretty mode.
//!
//! This is a whitespace-only transformation: the formatter walks the
//! rendered markup as a stream of tags and text runs and re-emits every
//! token on its own indented line. It never rewrites a tag or a text run,
//! so pretty output differs from raw output purely in inter-token
//! whitespace.

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Elements whose content must stay byte-exact.
const RAW_TEXT_ELEMENTS: &[&str] = &["pre", "script", "style", "textarea"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
	Tag(&'a str),
	Text(&'a str),
}

impl<'a> Token<'a> {
	fn source(&self) -> &'a str {
		match *self {
			Token::Tag(source) | Token::Text(source) => source,
		}
	}
}

enum TagKind<'a> {
	/// Opens an element that takes a closing tag; indents what follows.
	Open(&'a str),
	/// Closes an element; dedents itself.
	Close,
	/// Leaves depth untouched: void element, self-closing tag, comment,
	/// doctype, processing instruction.
	Flat,
}

/// Re-indent markup with a fixed indent width.
///
/// Closing tags that were never opened clamp at depth zero instead of
/// underflowing. The result always ends with exactly one trailing newline.
pub fn format_html(html: &str, indent_size: usize) -> String {
	let tokens = tokenize(html);
	let pad = " ".repeat(indent_size);
	let mut out = String::with_capacity(html.len() + html.len() / 4);
	let mut depth = 0usize;
	let mut index = 0;

	while index < tokens.len() {
		match tokens[index] {
			Token::Text(text) => {
				let trimmed = text.trim();
				if !trimmed.is_empty() {
					push_line(&mut out, &pad, depth, trimmed);
				}
			}
			Token::Tag(tag) => {
				match classify(tag) {
					TagKind::Close => {
						depth = depth.saturating_sub(1);
						push_line(&mut out, &pad, depth, tag.trim());
					}
					TagKind::Flat => push_line(&mut out, &pad, depth, tag.trim()),
					TagKind::Open(name) if is_raw_text_element(name) => {
						push_line(&mut out, &pad, depth, tag.trim());
						index = emit_raw_body(&mut out, &tokens, index + 1, name);
						if let Some(Token::Tag(close)) = tokens.get(index) {
							push_line(&mut out, &pad, depth, close.trim());
						}
					}
					TagKind::Open(_) => {
						push_line(&mut out, &pad, depth, tag.trim());
						depth += 1;
					}
				}
			}
		}
		index += 1;
	}

	if !out.ends_with('\n') {
		out.push('\n');
	}

	out
}

/// Split markup into tag and text tokens. Lossless: concatenating the
/// tokens reproduces the input byte for byte.
fn tokenize(html: &str) -> Vec<Token<'_>> {
	let mut tokens = Vec::new();
	let mut pos = 0;

	while pos < html.len() {
		if html.as_bytes()[pos] == b'<' {
			let end = tag_end(html, pos);
			tokens.push(Token::Tag(&html[pos..end]));
			pos = end;
		} else {
			let end = html[pos..].find('<').map_or(html.len(), |offset| pos + offset);
			tokens.push(Token::Text(&html[pos..end]));
			pos = end;
		}
	}

	tokens
}

/// Index one past the `>` that closes the tag starting at `start`.
/// Comments scan to `-->`; quoted attribute values may contain `>`.
fn tag_end(html: &str, start: usize) -> usize {
	if let Some(comment) = html[start..].strip_prefix("<!--") {
		return comment
			.find("-->")
			.map_or(html.len(), |offset| start + 4 + offset + 3);
	}

	let bytes = html.as_bytes();
	let mut quote: Option<u8> = None;
	let mut i = start + 1;

	while i < bytes.len() {
		match (quote, bytes[i]) {
			(Some(open), byte) if byte == open => quote = None,
			(Some(_), _) => {}
			(None, byte @ (b'"' | b'\'')) => quote = Some(byte),
			(None, b'>') => return i + 1,
			(None, _) => {}
		}
		i += 1;
	}

	html.len()
}

/// Copy tokens verbatim until the closing tag for `name`, returning the
/// index of that closing tag (or the end of the token stream).
fn emit_raw_body(out: &mut String, tokens: &[Token<'_>], mut index: usize, name: &str) -> usize {
	let mut body = String::new();

	while index < tokens.len() {
		if let Token::Tag(tag) = tokens[index] {
			if tag.starts_with("</") && tag_name(tag).eq_ignore_ascii_case(name) {
				break;
			}
		}
		body.push_str(tokens[index].source());
		index += 1;
	}

	if !body.is_empty() {
		out.push_str(&body);
		if !body.ends_with('\n') {
			out.push('\n');
		}
	}

	index
}

fn classify(tag: &str) -> TagKind<'_> {
	if tag.starts_with("</") {
		return TagKind::Close;
	}
	if tag.starts_with("<!") || tag.starts_with("<?") || tag.ends_with("/>") {
		return TagKind::Flat;
	}

	let name = tag_name(tag);
	if VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name)) {
		TagKind::Flat
	} else {
		TagKind::Open(name)
	}
}

fn is_raw_text_element(name: &str) -> bool {
	RAW_TEXT_ELEMENTS
		.iter()
		.any(|raw| raw.eq_ignore_ascii_case(name))
}

fn tag_name(tag: &str) -> &str {
	let inner = tag.trim_start_matches('<').trim_start_matches('/');
	let end = inner
		.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
		.unwrap_or(inner.len());
	&inner[..end]
}

fn push_line(out: &mut String, pad: &str, depth: usize, line: &str) {
	for _ in 0..depth {
		out.push_str(pad);
	}
	out.push_str(line);
	out.push('\n');
}
