use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub published_on: NaiveDate,
    pub description: String,
    pub source: String,
    pub url: String,
}

impl NewsItem {
    /// Publication date as shown on the news page, e.g. `2025년 9월 5일`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published_on.format("%Y년 %-m월 %-d일").to_string()
    }
}

/// News list, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<NewsItem>", into = "Vec<NewsItem>")]
pub struct NewsFeed {
    items: Vec<NewsItem>,
}

impl NewsFeed {
    /// Builds a feed ordered by publication date, newest first.
    ///
    /// Items sharing a date keep their given order.
    #[must_use]
    pub fn new(mut items: Vec<NewsItem>) -> Self {
        items.sort_by(|a, b| b.published_on.cmp(&a.published_on));
        Self { items }
    }

    pub fn builtin() -> SiteResult<Self> {
        let items = vec![
            NewsItem {
                id: 1,
                title: "'밀어서 잠금해제' 특허소송, 애플 승소 확정".to_owned(),
                published_on: date(2025, 9, 5)?,
                description: "미국 연방대법원이 애플의 '밀어서 잠금해제(slide to unlock)' 특허 관련 소송에서 최종 승소 판결을 내렸습니다. 이는 스마트폰 UI 특허의 중요성을 재확인하는 판례로 평가되고 있습니다.".to_owned(),
                source: "더구루".to_owned(),
                url: "https://www.theguru.co.kr/news/article.html?no=91418".to_owned(),
            },
            NewsItem {
                id: 2,
                title: "특허청, '지식재산처'로 격상 추진 본격화".to_owned(),
                published_on: date(2025, 8, 19)?,
                description: "정부가 특허청을 '지식재산처'로 격상시키는 방안을 본격 추진한다고 발표했습니다. 지식재산권의 중요성이 커지면서 정부 차원의 정책 추진력을 강화하고, 국가 지식재산 전략의 컨트롤타워 역할을 확대할 예정입니다.".to_owned(),
                source: "한국일보".to_owned(),
                url: "https://www.hankookilbo.com/News/Read/A2025081815420004675".to_owned(),
            },
        ];
        Ok(Self::new(items))
    }

    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<NewsItem>> for NewsFeed {
    fn from(items: Vec<NewsItem>) -> Self {
        Self::new(items)
    }
}

impl From<NewsFeed> for Vec<NewsItem> {
    fn from(feed: NewsFeed) -> Self {
        feed.items
    }
}

fn date(year: i32, month: u32, day: u32) -> SiteResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SiteError::InvalidData(format!("invalid news date {year}-{month}-{day}"))
    })
}
