//! The fields we keep about a bill.

use std::fmt;

pub const TITLE : &'static str = "Title";
pub const SPONSORED_BY : &'static str = "Sponsored by";
pub const STATUS : &'static str = "Status";
pub const SYNOPSIS : &'static str = "Synopsis";
pub const COMMITTEES : &'static str = "Committees";

/// The canonical fields, in the order they are written out.
pub const CANONICAL_FIELDS : [&'static str;5] = [TITLE,SPONSORED_BY,STATUS,SYNOPSIS,COMMITTEES];

/// A value scraped from a page. Committees come back as a list when they are links, otherwise as plain text.
#[derive(Debug,Clone,Eq,PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Flatten to a single string, joining lists with `"; "`.
    pub fn flatten(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(v) => v.join("; "),
        }
    }
}

/// Lists are shown as `['A', 'B']`, to tell a one element list from a plain string.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::List(v) => {
                let quoted : Vec<String> = v.iter().map(|s|format!("'{}'",s)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s.to_string()) }
}
impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}
impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self { FieldValue::List(v) }
}

/// A map from field name to value that remembers the order keys were first inserted.
/// Re-inserting a key replaces its value but keeps its position.
#[derive(Debug,Clone,Eq,PartialEq)]
pub struct FieldMap<V> {
    entries : Vec<(String,V)>,
}

impl <V> Default for FieldMap<V> {
    fn default() -> Self { FieldMap{ entries: Vec::new() } }
}

impl <V> FieldMap<V> {
    pub fn new() -> Self { Self::default() }
    pub fn insert(&mut self,key:impl Into<String>,value:V) {
        let key = key.into();
        if let Some(existing) = self.entries.iter_mut().find(|(k,_)|*k==key) {
            existing.1=value;
        } else {
            self.entries.push((key,value));
        }
    }
    pub fn get(&self,key:&str) -> Option<&V> {
        self.entries.iter().find(|(k,_)|k==key).map(|(_,v)|v)
    }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item=(&str,&V)> {
        self.entries.iter().map(|(k,v)|(k.as_str(),v))
    }
}

impl <V> IntoIterator for FieldMap<V> {
    type Item = (String,V);
    type IntoIter = std::vec::IntoIter<(String,V)>;
    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl <K:Into<String>,V> FromIterator<(K,V)> for FieldMap<V> {
    fn from_iter<T: IntoIterator<Item=(K,V)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (k,v) in iter { map.insert(k,v); }
        map
    }
}

/// Everything we extract from a bill's details page. Fields not on the page are None.
#[derive(Debug,Clone,Default,Eq,PartialEq)]
pub struct BillRecord {
    pub title : Option<String>,
    pub sponsored_by : Option<String>,
    pub status : Option<String>,
    pub synopsis : Option<String>,
    pub committees : Option<FieldValue>,
}

impl BillRecord {
    /// Pick the canonical fields out of the two sections of the page.
    pub fn from_sections(top_box:&FieldMap<String>,details:&FieldMap<FieldValue>) -> Self {
        BillRecord {
            title: top_box.get(TITLE).cloned(),
            sponsored_by: top_box.get(SPONSORED_BY).cloned(),
            status: top_box.get(STATUS).cloned(),
            synopsis: details.get(SYNOPSIS).map(FieldValue::flatten),
            committees: details.get(COMMITTEES).cloned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_keeps_first_position() {
        let mut map = FieldMap::new();
        map.insert("Title","a".to_string());
        map.insert("Status","b".to_string());
        map.insert("Title","c".to_string());
        let pairs : Vec<(&str,&String)> = map.iter().collect();
        assert_eq!(2,pairs.len());
        assert_eq!(("Title",&"c".to_string()),pairs[0]);
        assert_eq!(Some(&"b".to_string()),map.get("Status"));
        assert_eq!(2,map.len());
    }

    #[test]
    fn test_from_sections() {
        let top : FieldMap<String> = vec![("Title","Act X".to_string()),("Analysis","n/a".to_string())].into_iter().collect();
        let mut details = FieldMap::new();
        details.insert("Committees",FieldValue::List(vec!["Rules".to_string()]));
        let record = BillRecord::from_sections(&top,&details);
        assert_eq!(Some("Act X".to_string()),record.title);
        assert_eq!(None,record.sponsored_by);
        assert_eq!(None,record.synopsis);
        assert_eq!(Some(FieldValue::List(vec!["Rules".to_string()])),record.committees);
    }

    #[test]
    fn test_flatten() {
        assert_eq!("A; B",FieldValue::List(vec!["A".to_string(),"B".to_string()]).flatten());
        assert_eq!("Ways and Means",FieldValue::from("Ways and Means").flatten());
        assert_eq!("",FieldValue::List(vec![]).flatten());
    }

    #[test]
    fn test_display_quotes_list_items() {
        assert_eq!("['Rules']",FieldValue::List(vec!["Rules".to_string()]).to_string());
        assert_eq!("['Judiciary', 'Rules']",FieldValue::List(vec!["Judiciary".to_string(),"Rules".to_string()]).to_string());
        assert_eq!("Ways and Means",FieldValue::from("Ways and Means").to_string());
    }
}
