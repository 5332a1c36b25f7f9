// src/pagination.rs
//! Paging and sorting for list endpoints.
//!
//! `?page=0&size=12&sort=name,asc` arrives as [`PageParams`], is checked
//! against a resource's sortable fields and becomes a [`PageRequest`], which
//! the repositories turn into `ORDER BY ... LIMIT ... OFFSET ...`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Raw query string parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Sort order resolved to a whitelisted column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE, sort: None }
    }
}

impl PageRequest {
    /// Fails on a zero size; sizes above [`MAX_PAGE_SIZE`] are capped.
    pub fn of(page: u32, size: u32) -> Result<Self, String> {
        Ok(Self { page, size: checked_size(size)?, sort: None })
    }

    pub fn sorted(mut self, column: &'static str, direction: Direction) -> Self {
        self.sort = Some(Sort { column, direction });
        self
    }

    /// Resolve query parameters against `fields`, a list of
    /// `(wire name, column name)` pairs a resource allows sorting on.
    pub fn from_params(
        params: PageParams,
        fields: &[(&str, &'static str)],
    ) -> Result<Self, String> {
        let sort = match params.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_sort(raw, fields)?),
        };

        let size = checked_size(params.size.unwrap_or(DEFAULT_PAGE_SIZE))?;

        Ok(Self { page: params.page.unwrap_or(0), size, sort })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

fn checked_size(size: u32) -> Result<u32, String> {
    if size == 0 {
        return Err("Page size must be greater than zero".to_string());
    }
    Ok(size.min(MAX_PAGE_SIZE))
}

fn parse_sort(raw: &str, fields: &[(&str, &'static str)]) -> Result<Sort, String> {
    let mut parts = raw.splitn(2, ',').map(str::trim);
    let property = parts.next().unwrap_or_default();

    let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("asc") => Direction::Asc,
        Some("desc") => Direction::Desc,
        Some(other) => return Err(format!("Invalid sort direction '{}'", other)),
    };

    let column = fields
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, column)| *column)
        .ok_or_else(|| format!("Cannot sort by '{}'", property))?;

    Ok(Sort { column, direction })
}

/// A bounded slice of an ordered result set plus the total element count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = request.size.max(1);
        let total_pages = (total_elements + i64::from(size) - 1) / i64::from(size);
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size,
            number_of_elements,
            first: request.page == 0,
            last: i64::from(request.page) + 1 >= total_pages,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[(&str, &str)] = &[("id", "id"), ("name", "name"), ("imageUrl", "image_url")];

    fn params(page: Option<u32>, size: Option<u32>, sort: Option<&str>) -> PageParams {
        PageParams { page, size, sort: sort.map(str::to_string) }
    }

    #[test]
    fn defaults_when_no_params_given() {
        let request = PageRequest::from_params(PageParams::default(), FIELDS).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), i64::from(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn parses_field_and_direction() {
        let request =
            PageRequest::from_params(params(Some(2), Some(12), Some("name,desc")), FIELDS).unwrap();

        assert_eq!(request.offset(), 24);
        assert_eq!(request.limit(), 12);
        assert_eq!(request.sort, Some(Sort { column: "name", direction: Direction::Desc }));
    }

    #[test]
    fn direction_defaults_to_ascending_and_maps_wire_names() {
        let request = PageRequest::from_params(params(None, None, Some("imageUrl")), FIELDS).unwrap();
        assert_eq!(request.sort, Some(Sort { column: "image_url", direction: Direction::Asc }));
    }

    #[test]
    fn rejects_unknown_field_and_direction() {
        let err = PageRequest::from_params(params(None, None, Some("password,asc")), FIELDS)
            .unwrap_err();
        assert!(err.contains("password"));

        assert!(PageRequest::from_params(params(None, None, Some("name,up")), FIELDS).is_err());
    }

    #[test]
    fn rejects_zero_size_and_caps_large_size() {
        assert!(PageRequest::from_params(params(None, Some(0), None), FIELDS).is_err());
        assert!(PageRequest::of(0, 0).is_err());
        assert_eq!(PageRequest::of(0, 50_000).unwrap().size, MAX_PAGE_SIZE);

        let request = PageRequest::from_params(params(None, Some(50_000), None), FIELDS).unwrap();
        assert_eq!(request.size, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_metadata_reports_total_independent_of_slice() {
        let page = Page::new(vec!["a"; 12], &PageRequest::of(0, 12).unwrap(), 25);

        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 12);
        assert!(page.first);
        assert!(!page.last);

        let last = Page::new(vec!["z"], &PageRequest::of(2, 12).unwrap(), 25);
        assert!(last.last);
        assert!(!last.first);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], &PageRequest::of(0, 2).unwrap(), 5).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }
}
