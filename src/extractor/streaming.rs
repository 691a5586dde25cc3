//! Streaming token extractor.
//!
//! Feeds the document through the HTML tokenizer without building a tree.
//! Tags are handled as they stream past, so the position of an element in
//! the document does not matter and unbalanced markup is harmless.
//!
//! Title text is tracked by [`TitleState`], a value threaded through every
//! token: a start tag either opens a title or abandons one, text extends
//! an open title, and an end tag commits it. Each committed title
//! overwrites the previous one, so the last `<title>` in the document wins.

use std::cell::RefCell;
use std::mem;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;

use super::Extractor;
use crate::fields::{MetaField, RawExtraction};

/// Title tracking state for the streaming extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TitleState {
    /// Not inside a `<title>` element.
    #[default]
    Idle,
    /// Inside `<title>`, holding the text seen so far.
    InsideTitle(String),
}

impl TitleState {
    /// Transition on a start tag. Any start tag other than `title`
    /// discards partially collected title text.
    #[must_use]
    pub fn on_start_tag(self, name: &str) -> Self {
        if name == "title" {
            TitleState::InsideTitle(String::new())
        } else {
            TitleState::Idle
        }
    }

    /// Transition on a run of character data.
    #[must_use]
    pub fn on_text(self, text: &str) -> Self {
        match self {
            TitleState::InsideTitle(mut collected) => {
                collected.push_str(text);
                TitleState::InsideTitle(collected)
            }
            TitleState::Idle => TitleState::Idle,
        }
    }

    /// Transition on an end tag (or end of input). Returns the completed
    /// title when one was open.
    #[must_use]
    pub fn on_end_tag(self) -> (Self, Option<String>) {
        match self {
            TitleState::InsideTitle(collected) => (TitleState::Idle, Some(collected)),
            TitleState::Idle => (TitleState::Idle, None),
        }
    }
}

/// Tokenizer state for elements whose content is not markup.
fn raw_kind(tag_name: &str) -> Option<RawKind> {
    match tag_name {
        "title" | "textarea" => Some(RawKind::Rcdata),
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct StreamState {
    title: TitleState,
    raw: RawExtraction,
}

impl StreamState {
    fn start_tag(&mut self, tag: &Tag) -> Option<RawKind> {
        let name: &str = &tag.name;
        self.title = mem::take(&mut self.title).on_start_tag(name);

        match name {
            "meta" => self.meta(tag),
            "img" => {
                if let Some(src) = attr(tag, "src") {
                    self.raw.images.push(src.to_string());
                }
            }
            _ => {}
        }

        raw_kind(name)
    }

    fn meta(&mut self, tag: &Tag) {
        let Some(content) = attr(tag, "content") else {
            return;
        };
        if let Some(field) = MetaField::from_meta_attrs(attr(tag, "name"), attr(tag, "property")) {
            self.raw.fields.set(field, content);
        }
    }

    fn text(&mut self, text: &str) {
        self.title = mem::take(&mut self.title).on_text(text);
    }

    fn end_tag(&mut self) {
        let (next, completed) = mem::take(&mut self.title).on_end_tag();
        self.title = next;
        if let Some(title) = completed {
            self.raw.fields.set(MetaField::Title, title);
        }
    }
}

fn attr<'t>(tag: &'t Tag, name: &str) -> Option<&'t str> {
    tag.attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| &*a.value)
}

/// Token sink collecting metadata as tokens arrive.
#[derive(Default)]
struct MetaSink {
    state: RefCell<StreamState>,
}

impl MetaSink {
    fn finish(&self) -> RawExtraction {
        let mut state = self.state.borrow_mut();
        // An unclosed <title> still counts at end of input.
        state.end_tag();
        mem::take(&mut state.raw)
    }
}

impl TokenSink for MetaSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut state = self.state.borrow_mut();
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    if let Some(kind) = state.start_tag(&tag) {
                        return TokenSinkResult::RawData(kind);
                    }
                }
                TagKind::EndTag => state.end_tag(),
            },
            Token::CharacterTokens(text) => state.text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Single-pass extractor over the HTML token stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingExtractor;

impl Extractor for StreamingExtractor {
    fn extract(&self, html: &str) -> RawExtraction {
        let tokenizer = Tokenizer::new(MetaSink::default(), TokenizerOpts::default());
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));
        match tokenizer.feed(&input) {
            // MetaSink never suspends for script execution, so one feed drains the input.
            TokenizerResult::Done | TokenizerResult::Script(()) => {}
        }
        tokenizer.end();
        tokenizer.sink.finish()
    }
}
