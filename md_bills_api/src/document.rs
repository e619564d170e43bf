//! A small read only view of a parsed HTML page, just enough for the bill extractors.
//!
//! The extractors are written against [DocumentNode] rather than directly against `scraper`, so
//! they only ever ask for "the first node with this class", "all descendants with this tag",
//! children and text.

use std::ops::Deref;
use scraper::{ElementRef, Html};

/// What to look for when searching a tree.
#[derive(Debug,Clone,Copy,Eq,PartialEq)]
pub enum Select<'a> {
    Tag(&'a str),
    /// One or more whitespace separated classes, all of which must be present (e.g. `"row top-box"`).
    Class(&'a str),
    TagWithClass(&'a str,&'a str),
    Id(&'a str),
}

impl <'a> Select<'a> {
    pub fn matches<N:DocumentNode>(&self,node:&N) -> bool {
        match *self {
            Select::Tag(tag) => node.tag_name().eq_ignore_ascii_case(tag),
            Select::Class(classes) => has_all_classes(node,classes),
            Select::TagWithClass(tag,classes) => node.tag_name().eq_ignore_ascii_case(tag) && has_all_classes(node,classes),
            Select::Id(id) => node.attr("id")==Some(id),
        }
    }
}

fn has_all_classes<N:DocumentNode>(node:&N,classes:&str) -> bool {
    let mut wanted = classes.split_whitespace().peekable();
    wanted.peek().is_some() && wanted.all(|c|node.has_class(c))
}

/// An element in a parsed document tree.
pub trait DocumentNode : Sized + Clone {
    fn tag_name(&self) -> &str;
    fn attr(&self,name:&str) -> Option<&str>;
    /// Element children, in document order. Text and comments are not included.
    fn children(&self) -> Vec<Self>;
    /// All the text inside this node. Each text fragment is trimmed and empty ones dropped, then
    /// they are concatenated with no separator, so `<dd>Delegate <a>Smith</a></dd>` gives `DelegateSmith`.
    fn text_content(&self) -> String;
    /// Element descendants (not including self) in document order. This must not recurse, as
    /// pages from the web can be nested arbitrarily deep.
    fn descendant_elements<'s>(&'s self) -> Box<dyn Iterator<Item=Self> + 's>;

    fn has_class(&self,class:&str) -> bool {
        self.attr("class").map(|c|c.split_whitespace().any(|c|c==class)).unwrap_or(false)
    }

    /// All descendants (not including self) matching `select`, in document order.
    fn find_all(&self,select:Select<'_>) -> Vec<Self> {
        self.descendant_elements().filter(|n|select.matches(n)).collect()
    }

    /// The first descendant (not including self) matching `select`, in document order.
    fn find_first(&self,select:Select<'_>) -> Option<Self> {
        self.descendant_elements().find(|n|select.matches(n))
    }
}

impl <'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str { self.value().name() }
    fn attr(&self,name:&str) -> Option<&str> { self.value().attr(name) }
    fn children(&self) -> Vec<Self> {
        Deref::deref(self).children().filter_map(ElementRef::wrap).collect()
    }
    fn text_content(&self) -> String {
        ElementRef::text(self).map(str::trim).filter(|s|!s.is_empty()).collect()
    }
    fn descendant_elements<'s>(&'s self) -> Box<dyn Iterator<Item=Self> + 's> {
        Box::new(Deref::deref(self).descendants().skip(1).filter_map(ElementRef::wrap))
    }
}

/// One downloaded page, parsed.
pub struct HtmlDocument {
    html : Html,
}

impl HtmlDocument {
    /// Parse raw bytes from the web. Invalid UTF-8 is replaced rather than rejected.
    pub fn parse(bytes:&[u8]) -> Self {
        Self::parse_str(&String::from_utf8_lossy(bytes))
    }
    pub fn parse_str(html:&str) -> Self {
        HtmlDocument{ html : Html::parse_document(html) }
    }
    /// The `<html>` element, from which everything is searched.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_strips_each_fragment() {
        let doc = HtmlDocument::parse_str("<div id='x'>\n  Delegate <a href='#'>Smith</a> ,\n <span> </span>Jones  </div>");
        let div = doc.root().find_first(Select::Id("x")).unwrap();
        assert_eq!("DelegateSmith,Jones",div.text_content());
    }

    #[test]
    fn test_composite_class_needs_every_class() {
        let doc = HtmlDocument::parse_str(r#"<div class="row">a</div><dl class="top-box row wide">b</dl>"#);
        let found = doc.root().find_first(Select::Class("row top-box")).unwrap();
        assert_eq!("dl",found.tag_name());
        assert!(doc.root().find_first(Select::Class("row missing")).is_none());
        assert!(doc.root().find_first(Select::Class("   ")).is_none());
    }

    #[test]
    fn test_find_all_is_document_order_and_excludes_self() {
        let doc = HtmlDocument::parse_str(r#"<div class="row" id="outer"><div class="row"><p>1</p></div><div class="row"><p>2</p><div class="row"><p>3</p></div></div></div>"#);
        let outer = doc.root().find_first(Select::Id("outer")).unwrap();
        let rows = outer.find_all(Select::TagWithClass("div","row"));
        let texts : Vec<String> = rows.iter().map(|r|r.text_content()).collect();
        assert_eq!(vec!["1","23","3"],texts);
    }

    #[test]
    fn test_children_are_elements_only() {
        let doc = HtmlDocument::parse_str("<dl id='d'>text<dt>A</dt><!-- c --><dd>B</dd></dl>");
        let dl = doc.root().find_first(Select::Id("d")).unwrap();
        let names : Vec<String> = dl.children().iter().map(|c|c.tag_name().to_string()).collect();
        assert_eq!(vec!["dt","dd"],names);
    }

    #[test]
    fn test_parse_tolerates_bad_utf8() {
        let doc = HtmlDocument::parse(b"<p id='p'>caf\xff</p>");
        assert_eq!("caf\u{FFFD}",doc.root().find_first(Select::Id("p")).unwrap().text_content());
    }
}
