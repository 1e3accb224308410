//! Types used by the article/alias store.

/// Article identifier.
pub type ArticleId = i64;

/// Article publication status stored as a string. Only `Live` articles are
/// eligible redirect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Draft,
    Pending,
    Hidden,
    Live,
    Sticky,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Pending => "pending",
            ArticleStatus::Hidden => "hidden",
            ArticleStatus::Live => "live",
            ArticleStatus::Sticky => "sticky",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "draft" => ArticleStatus::Draft,
            "pending" => ArticleStatus::Pending,
            "hidden" => ArticleStatus::Hidden,
            "live" => ArticleStatus::Live,
            "sticky" => ArticleStatus::Sticky,
            _ => ArticleStatus::Draft,
        }
    }
}

/// Full article record as stored.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub status: ArticleStatus,
    /// Canonical URL (permlink) of the article.
    pub url: String,
    /// The ten custom-field slots, index 0 = `custom_1`. Empty = no alias.
    pub custom: Vec<String>,
}

/// One row in the alias listing: which article, which slot, what value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRow {
    pub article_id: ArticleId,
    pub field: u8,
    pub title: String,
    pub alias: String,
}

/// Sort column for the alias listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCol {
    Id,
    Title,
    Alias,
}

impl SortCol {
    pub fn as_str(self) -> &'static str {
        match self {
            SortCol::Id => "id",
            SortCol::Title => "title",
            SortCol::Alias => "alias",
        }
    }

    /// Parse the stored/requested form; anything unknown falls back to the
    /// alias column, the listing's default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "id" => SortCol::Id,
            "title" => SortCol::Title,
            _ => SortCol::Alias,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Listing parameters: sort, optional filter, pagination.
#[derive(Debug, Clone)]
pub struct AliasQuery {
    pub sort: SortCol,
    pub dir: SortDir,
    /// Substring match on alias or title; an all-digit filter also matches
    /// the article id exactly.
    pub filter: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for AliasQuery {
    fn default() -> Self {
        Self {
            sort: SortCol::Alias,
            dir: SortDir::Desc,
            filter: None,
            page: 1,
            per_page: 25,
        }
    }
}

impl AliasQuery {
    /// ORDER BY clause over the CTE (`a`) joined to articles (`b`). Alias
    /// and title sorts tie-break on article id descending.
    pub(crate) fn order_by(&self) -> String {
        let dir = self.dir.sql();
        match self.sort {
            SortCol::Id => format!("a.id {dir}"),
            SortCol::Alias => format!("a.c {dir}, a.id DESC"),
            SortCol::Title => format!("b.title {dir}, a.id DESC"),
        }
    }

    pub(crate) fn offset(&self) -> i64 {
        let page = self.page.max(1) as i64;
        (page - 1) * self.per_page as i64
    }
}
