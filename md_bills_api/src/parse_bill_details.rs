//! Parse a bill's details page from https://mgaleg.maryland.gov/mgawebsite/Legislation/Details/hb0001?ys=2025RS
//!
//! The interesting information is in two places. The "top box" is a definition list
//! ```text
//! <dl class="row top-box">
//!     <dt class="col-sm-2">Title</dt>
//!     <dd class="col-sm-10">Public Safety - Firearms - Storage</dd>
//!     <dt class="col-sm-2">Sponsored by</dt>
//!     <dd class="col-sm-10">Delegate <a href="...">Smith</a></dd>
//!     <dt class="col-sm-2">Status</dt>
//!     <dd class="col-sm-10">In the House - Hearing 2/04 at 1:00 p.m.</dd>
//! </dl>
//! ```
//! and the details tab is a set of rows of label/value divs
//! ```text
//! <div class="row details-tab-info">
//!     <div class="row"><div class="col-2">Synopsis</div><div class="col-10">Requiring ...</div></div>
//!     <div class="row"><div class="col-2">Committees</div><div class="col-10"><a href="...">Judiciary</a><br/><a href="...">Rules</a></div></div>
//! </div>
//! ```
//! Missing sections are not errors; they just give nothing.

use crate::bill_record::{BillRecord, FieldMap, FieldValue, COMMITTEES, SYNOPSIS};
use crate::document::{DocumentNode, Select};

const TOP_BOX_CLASS : &'static str = "row top-box";
const DETAILS_TAB_CLASS : &'static str = "row details-tab-info";

/// Extract the label/value pairs from the top box.
/// A `dt` gives the key for the next `dd`. A `dt` with no `dd` after it is forgotten.
pub fn extract_top_box<N:DocumentNode>(doc:&N) -> FieldMap<String> {
    let mut res = FieldMap::new();
    let Some(top_box) = doc.find_first(Select::Class(TOP_BOX_CLASS)) else { return res };
    let mut key : Option<String> = None;
    for child in top_box.children() {
        match child.tag_name() {
            "dt" => { key = Some(child.text_content()).filter(|k|!k.is_empty()); }
            "dd" => {
                if let Some(key) = key.take() {
                    res.insert(key,child.text_content());
                }
            }
            _ => {}
        }
    }
    res
}

/// Extract Synopsis and Committees from the details tab.
///
/// Committees are usually links, in which case the result is the list of link texts. If there
/// are no links the whole text of the value is used as a single string, not a one element list.
pub fn extract_details_tab_info<N:DocumentNode>(doc:&N) -> FieldMap<FieldValue> {
    let mut res = FieldMap::new();
    let Some(details_tab) = doc.find_first(Select::Class(DETAILS_TAB_CLASS)) else { return res };
    for row in details_tab.find_all(Select::Class("row")) {
        let cols : Vec<N> = row.children().into_iter().filter(|c|c.tag_name()=="div").collect();
        if cols.len()<2 { continue; }
        let label = cols[0].text_content();
        let value = &cols[1];
        if label==SYNOPSIS {
            res.insert(SYNOPSIS,FieldValue::Text(value.text_content()));
        } else if label==COMMITTEES {
            let committees : Vec<String> = value.find_all(Select::Tag("a")).iter().map(|a|a.text_content()).collect();
            let committees = if committees.is_empty() { FieldValue::Text(value.text_content()) } else { FieldValue::List(committees) };
            res.insert(COMMITTEES,committees);
        }
    }
    res
}

/// Both sections of a details page combined into the canonical fields.
pub fn extract_bill_record<N:DocumentNode>(doc:&N) -> BillRecord {
    BillRecord::from_sections(&extract_top_box(doc),&extract_details_tab_info(doc))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    fn top_box(inner:&str) -> FieldMap<String> {
        let doc = HtmlDocument::parse_str(&format!(r#"<html><body><dl class="row top-box">{}</dl></body></html>"#,inner));
        extract_top_box(&doc.root())
    }

    fn details(inner:&str) -> FieldMap<FieldValue> {
        let doc = HtmlDocument::parse_str(&format!(r#"<html><body><div class="row details-tab-info">{}</div></body></html>"#,inner));
        extract_details_tab_info(&doc.root())
    }

    #[test]
    fn test_top_box_missing() {
        let doc = HtmlDocument::parse_str("<html><body><dl class='row'><dt>Title</dt><dd>x</dd></dl></body></html>");
        assert!(extract_top_box(&doc.root()).is_empty());
    }

    #[test]
    fn test_top_box_pairs() {
        let res = top_box("<dt>Title</dt><dd>Act X</dd><dt>Status</dt><dd>Passed</dd>");
        let pairs : Vec<(&str,&str)> = res.iter().map(|(k,v)|(k,v.as_str())).collect();
        assert_eq!(vec![("Title","Act X"),("Status","Passed")],pairs);
    }

    #[test]
    fn test_top_box_trims_and_glues_links() {
        let res = top_box("<dt class='col-sm-2'>\n Sponsored by\n</dt>\n<dd class='col-sm-10'>\n  Delegate <a href='/x'>Smith</a>\n</dd>");
        assert_eq!(Some(&"DelegateSmith".to_string()),res.get("Sponsored by"));
    }

    #[test]
    fn test_top_box_unpaired_labels() {
        // second label wins; trailing label is dropped; stray dd ignored
        let res = top_box("<dd>orphan</dd><dt>Old</dt><dt>Title</dt><dd>Act X</dd><dd>extra</dd><dt>Status</dt>");
        assert_eq!(1,res.len());
        assert_eq!(Some(&"Act X".to_string()),res.get("Title"));
        assert_eq!(None,res.get("Old"));
        assert_eq!(None,res.get("Status"));
    }

    #[test]
    fn test_top_box_empty_label_is_no_label() {
        let res = top_box("<dt> </dt><dd>nothing</dd><dt>Title</dt><dd></dd>");
        assert_eq!(1,res.len());
        assert_eq!(Some(&"".to_string()),res.get("Title"));
    }

    #[test]
    fn test_details_missing() {
        let doc = HtmlDocument::parse_str("<html><body><p>nothing</p></body></html>");
        assert!(extract_details_tab_info(&doc.root()).is_empty());
    }

    #[test]
    fn test_committee_links() {
        let res = details(r#"<div class="row"><div>Committees</div><div><a href="/j">Judiciary</a><br><a href="/r"> Rules </a></div></div>"#);
        assert_eq!(Some(&FieldValue::List(vec!["Judiciary".to_string(),"Rules".to_string()])),res.get("Committees"));
    }

    #[test]
    fn test_committee_without_links_is_a_string() {
        let res = details(r#"<div class="row"><div>Committees</div><div>
            Ways and Means
        </div></div>"#);
        assert_eq!(Some(&FieldValue::Text("Ways and Means".to_string())),res.get("Committees"));
    }

    #[test]
    fn test_synopsis_and_ignored_rows() {
        let res = details(r#"
            <div class="row"><div>Synopsis</div><div> Requiring a person to <b>store</b> a firearm. </div></div>
            <div class="row"><div>Only one column</div></div>
            <div class="row"><div>Cross-file</div><div>SB0001</div></div>"#);
        assert_eq!(1,res.len());
        assert_eq!(Some(&FieldValue::Text("Requiring a person tostorea firearm.".to_string())),res.get("Synopsis"));
    }

    #[test]
    fn test_nested_rows_are_found() {
        let res = details(r#"<div class="col"><section><div class="row"><div>Synopsis</div><div>deep</div></div></section></div>"#);
        assert_eq!(Some(&FieldValue::Text("deep".to_string())),res.get("Synopsis"));
    }

    #[test]
    fn test_deeply_nested_page() {
        let depth = 20000;
        let html = format!("<html><body>{}<dl class='row top-box'><dt>Title</dt><dd>Act X</dd></dl>{}</body></html>","<div>".repeat(depth),"</div>".repeat(depth));
        let doc = HtmlDocument::parse_str(&html);
        let res = extract_top_box(&doc.root());
        assert_eq!(Some(&"Act X".to_string()),res.get("Title"));
        assert!(extract_details_tab_info(&doc.root()).is_empty());
    }

    #[test]
    fn test_whole_record() {
        let doc = HtmlDocument::parse_str(r#"<html><body>
            <dl class="row top-box"><dt>Title</dt><dd>Act X</dd><dt>Sponsored by</dt><dd>Delegate Smith</dd><dt>Status</dt><dd>Passed</dd></dl>
            <div class="row details-tab-info">
                <div class="row"><div>Synopsis</div><div>Does things.</div></div>
                <div class="row"><div>Committees</div><div><a>Rules</a></div></div>
            </div></body></html>"#);
        let record = extract_bill_record(&doc.root());
        assert_eq!(BillRecord{
            title: Some("Act X".to_string()),
            sponsored_by: Some("Delegate Smith".to_string()),
            status: Some("Passed".to_string()),
            synopsis: Some("Does things.".to_string()),
            committees: Some(FieldValue::List(vec!["Rules".to_string()])),
        },record);
    }
}
