/// Skip/limit window over launches ordered by flight number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    /// `None` returns everything after `skip`
    pub limit: Option<usize>,
}

impl Pagination {
    /// Build from a 1-based page number and page size
    ///
    /// Page 0 is treated as page 1; a size of 0 means "no limit".
    pub fn page(page: usize, size: usize) -> Self {
        if size == 0 {
            return Self::all();
        }
        Self {
            skip: page.saturating_sub(1).saturating_mul(size),
            limit: Some(size),
        }
    }

    pub fn all() -> Self {
        Self {
            skip: 0,
            limit: None,
        }
    }

    /// Apply the window to an already ordered sequence
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let iter = items.into_iter().skip(self.skip);
        match self.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        let p = Pagination::page(2, 10);
        assert_eq!(p.skip, 10);
        assert_eq!(p.limit, Some(10));
        assert_eq!(Pagination::page(0, 10).skip, 0);
    }

    #[test]
    fn test_zero_size_is_unbounded() {
        assert_eq!(Pagination::page(3, 0), Pagination::all());
    }

    #[test]
    fn test_apply() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(Pagination::page(3, 10).apply(items.clone()), vec![21, 22, 23, 24, 25]);
        assert!(Pagination::page(4, 10).apply(items).is_empty());
    }
}
