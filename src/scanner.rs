//! Streaming start-tag scanner that records `src`/`href` references.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::models::Reference;

/// Attribute names whose values may name local assets.
const REFERENCE_ATTRS: [&str; 2] = ["src", "href"];

struct RefCollector {
    references: Vec<Reference>,
}

impl TokenSink for RefCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => {
                self.collect_tag_references(&tag, line_number);
                raw_data_transition(&tag)
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

impl RefCollector {
    fn collect_tag_references(&mut self, tag: &Tag, line: u64) {
        for name in REFERENCE_ATTRS {
            let attr = tag.attrs.iter().find(|attr| &*attr.name.local == name);
            let Some(attr) = attr else {
                continue;
            };
            if attr.value.is_empty() {
                continue;
            }
            self.references.push(Reference {
                raw: attr.value.to_string(),
                line,
            });
        }
    }
}

/// Tokenizer state transition to take after a start tag.
///
/// Raw-text elements must switch the tokenizer out of the data state, otherwise
/// markup-looking text inside `<script>` or `<style>` bodies would be scanned
/// as real tags and produce phantom references. A self-closing tag leaves no
/// element to fill, so no transition happens for it.
fn raw_data_transition(tag: &Tag) -> TokenSinkResult<()> {
    if tag.self_closing {
        return TokenSinkResult::Continue;
    }
    match &*tag.name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

/// Collect every non-empty `src`/`href` attribute value in document order.
///
/// Line numbers are 1-based and name the line on which the tag completes, so a
/// tag spanning several lines is attributed to the line of its closing `>`.
/// Tags carrying both attributes emit the `src` reference first. Malformed
/// markup is tokenized best-effort and never fails the scan.
pub fn scan_references(html: &str) -> Vec<Reference> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(
        RefCollector {
            references: Vec::new(),
        },
        TokenizerOpts::default(),
    );
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.references
}
