use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AnchorKey, ServiceId};
use crate::error::{SiteError, SiteResult};

/// Number of catalog entries previewed on the home page.
pub const FEATURED_SERVICE_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHighlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub highlights: Vec<ServiceHighlight>,
    pub service_items: Vec<String>,
}

impl ServiceCatalogEntry {
    #[must_use]
    pub fn anchor_key(&self) -> AnchorKey {
        AnchorKey::for_service(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ServiceCatalogEntry>", into = "Vec<ServiceCatalogEntry>")]
pub struct ServiceCatalog {
    entries: IndexMap<ServiceId, ServiceCatalogEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<ServiceCatalogEntry>) -> SiteResult<Self> {
        let mut by_id = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let id = entry.id;
            if by_id.insert(id, entry).is_some() {
                return Err(SiteError::InvalidData(format!(
                    "duplicate service catalog id `{id}`"
                )));
            }
        }
        Ok(Self { entries: by_id })
    }

    pub fn builtin() -> SiteResult<Self> {
        let entries = SERVICE_SEEDS
            .iter()
            .map(ServiceSeed::to_entry)
            .collect::<SiteResult<Vec<_>>>()?;
        Self::new(entries)
    }

    #[must_use]
    pub fn get(&self, id: ServiceId) -> Option<&ServiceCatalogEntry> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ServiceId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.entries.values()
    }

    /// Leading entries shown as cards on the home page.
    pub fn featured(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.entries.values().take(FEATURED_SERVICE_COUNT)
    }
}

impl TryFrom<Vec<ServiceCatalogEntry>> for ServiceCatalog {
    type Error = SiteError;

    fn try_from(entries: Vec<ServiceCatalogEntry>) -> SiteResult<Self> {
        Self::new(entries)
    }
}

impl From<ServiceCatalog> for Vec<ServiceCatalogEntry> {
    fn from(catalog: ServiceCatalog) -> Self {
        catalog.entries.into_values().collect()
    }
}

struct ServiceSeed {
    id: u32,
    title: &'static str,
    description: &'static str,
    highlights: [(&'static str, &'static str); 2],
    items: [&'static str; 6],
}

impl ServiceSeed {
    fn to_entry(&self) -> SiteResult<ServiceCatalogEntry> {
        Ok(ServiceCatalogEntry {
            id: ServiceId::new(self.id)?,
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            highlights: self
                .highlights
                .iter()
                .map(|(title, description)| ServiceHighlight {
                    title: (*title).to_owned(),
                    description: (*description).to_owned(),
                })
                .collect(),
            service_items: self.items.iter().map(|item| (*item).to_owned()).collect(),
        })
    }
}

const SERVICE_SEEDS: &[ServiceSeed] = &[
    ServiceSeed {
        id: 1,
        title: "특허",
        description: "혁신적인 발명과 기술을 법적으로 보호하고, 경쟁 우위를 확보할 수 있도록 특허 출원부터 등록, 활용까지 전 과정을 지원합니다. AI 기술 특허를 포함한 첨단 기술 분야의 전문적인 특허 전략을 제공합니다.",
        highlights: [
            ("특허 출원", "국내외 특허 출원 대행 및 AI 기술 특허 전략"),
            ("특허 분석", "선행기술 조사 및 특허맵 작성"),
        ],
        items: [
            "특허 출원 및 중간처리",
            "실용신안 출원 및 등록",
            "선행기술 조사 및 특허성 판단",
            "특허 포트폴리오 구축 및 관리",
            "무효심판 및 정정심판",
            "특허 라이센싱 및 기술이전",
        ],
    },
    ServiceSeed {
        id: 2,
        title: "표준 특허",
        description: "국제 표준 및 산업 표준에 필수적인 기술에 대한 특허로, 표준화 과정에서의 특허 전략 수립과 FRAND 라이센싱을 지원합니다.",
        highlights: [
            ("표준화 전략", "표준 특허 포트폴리오 구축"),
            ("FRAND 라이센싱", "공정하고 합리적인 라이센싱"),
        ],
        items: [
            "표준 필수 특허(SEP) 분석",
            "표준화 기구 대응 전략",
            "FRAND 선언 및 관리",
            "표준 특허 풀 참여 지원",
            "표준 특허 가치 평가",
            "표준 특허 분쟁 대응",
        ],
    },
    ServiceSeed {
        id: 3,
        title: "상표",
        description: "브랜드 가치를 보호하고 시장에서의 경쟁력을 강화할 수 있도록 상표 출원부터 권리 보호까지 종합적인 서비스를 제공합니다.",
        highlights: [
            ("브랜드 보호", "상표권 확보 및 관리"),
            ("국제 상표", "마드리드 의정서 활용"),
        ],
        items: [
            "상표 출원 및 등록",
            "상표 검색 및 등록가능성 조사",
            "서비스표 출원 및 등록",
            "상표 갱신 및 관리",
            "상표 이의신청 및 취소심판",
            "상표권 침해 대응 및 소송",
        ],
    },
    ServiceSeed {
        id: 4,
        title: "IP 컨설팅",
        description: "기업의 지식재산권 전략 수립부터 포트폴리오 관리까지 체계적이고 전문적인 컨설팅 서비스를 제공합니다.",
        highlights: [
            ("전략 수립", "IP 포트폴리오 기획"),
            ("기술 분석", "특허맵 및 FTO 분석"),
        ],
        items: [
            "IP 포트폴리오 전략 수립",
            "특허맵 작성 및 기술동향 분석",
            "자유실시 분석(FTO Analysis)",
            "IP 실사(Due Diligence)",
            "기술이전 및 라이센싱 전략",
            "IP 교육 및 임직원 연수",
        ],
    },
    ServiceSeed {
        id: 5,
        title: "디자인",
        description: "제품의 독창적인 외관 디자인을 보호하여 시장에서의 차별화와 경쟁 우위를 확보할 수 있도록 지원합니다.",
        highlights: [
            ("의장 등록", "제품 외관 디자인 보호"),
            ("해외 디자인", "국제 디자인 보호 전략"),
        ],
        items: [
            "디자인 출원 및 등록",
            "디자인 검색 및 등록가능성 조사",
            "복수디자인 출원 전략 수립",
            "디자인권 침해 분석 및 대응",
            "무효심판 및 권리범위확인심판",
            "헤이그 협정을 통한 해외 출원",
        ],
    },
    ServiceSeed {
        id: 6,
        title: "소송 및 분쟁",
        description: "지식재산권 침해 및 분쟁 상황에서 효과적인 법적 대응을 통해 고객의 권익을 보호하고 최적의 해결 방안을 제시합니다.",
        highlights: [
            ("침해 대응", "신속한 권리 구제"),
            ("분쟁 해결", "전략적 소송 수행"),
        ],
        items: [
            "특허 침해 소송 및 방어",
            "상표권 분쟁 해결",
            "무효심판 및 취소심판",
            "권리범위확인심판",
            "손해배상 청구 소송",
            "대안적 분쟁 해결(ADR)",
        ],
    },
];
