use super::QueryParams;

/// Pagination settings for list endpoints.
///
/// Fields left as `None` are not sent at all; the platform applies its own
/// defaults for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSetting {
    /// Page number.
    pub page: Option<u32>,
    /// Results per page.
    pub page_size: Option<u32>,
    /// Sort field, e.g. `id` or `-id` for descending.
    pub sort: Option<String>,
}

impl PageSetting {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    /// Writes `page`, `page_size` and `sort` for the fields that are set.
    pub fn add_to_params(&self, params: &mut QueryParams) {
        if let Some(page) = self.page {
            params.set("page", page.to_string());
        }
        if let Some(page_size) = self.page_size {
            params.set("page_size", page_size.to_string());
        }
        if let Some(sort) = &self.sort {
            params.set("sort", sort.as_str());
        }
    }
}
