use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::MemberId;
use crate::error::{SiteError, SiteResult};

/// Image references per presentation size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberImages {
    pub preview: String,
    pub list: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: MemberId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub images: MemberImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<String>,
}

/// Read-only roster in declaration order, keyed by member id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<StaffMember>", into = "Vec<StaffMember>")]
pub struct StaffRoster {
    members: IndexMap<MemberId, StaffMember>,
}

impl StaffRoster {
    pub fn new(members: Vec<StaffMember>) -> SiteResult<Self> {
        let mut by_id = IndexMap::with_capacity(members.len());
        for member in members {
            let id = member.id;
            if by_id.insert(id, member).is_some() {
                return Err(SiteError::InvalidData(format!(
                    "duplicate staff member id `{id}`"
                )));
            }
        }
        Ok(Self { members: by_id })
    }

    #[must_use]
    pub fn builtin() -> Self {
        let members = MEMBER_SEEDS.iter().map(MemberSeed::to_member).collect();
        Self { members }
    }

    #[must_use]
    pub fn get(&self, id: MemberId) -> Option<&StaffMember> {
        self.members.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaffMember> {
        self.members.values()
    }

    /// Members named by `ids`, in the order of `ids`.
    ///
    /// Unknown ids are skipped; repeated ids are kept once at their first
    /// position.
    #[must_use]
    pub fn ordered_subset(&self, ids: &[MemberId]) -> Vec<&StaffMember> {
        let mut picked: Vec<&StaffMember> = Vec::with_capacity(ids.len());
        for id in ids {
            if picked.iter().any(|member| member.id == *id) {
                continue;
            }
            if let Some(member) = self.members.get(id) {
                picked.push(member);
            }
        }
        picked
    }
}

impl TryFrom<Vec<StaffMember>> for StaffRoster {
    type Error = SiteError;

    fn try_from(members: Vec<StaffMember>) -> SiteResult<Self> {
        Self::new(members)
    }
}

impl From<StaffRoster> for Vec<StaffMember> {
    fn from(roster: StaffRoster) -> Self {
        roster.members.into_values().collect()
    }
}

struct MemberSeed {
    id: u32,
    name: &'static str,
    position: &'static str,
    department: &'static str,
    image_stem: &'static str,
    bio: &'static str,
    education: &'static [&'static str],
    experience: &'static [&'static str],
    expertise: &'static [&'static str],
}

impl MemberSeed {
    fn to_member(&self) -> (MemberId, StaffMember) {
        let id = MemberId::new(self.id);
        let images = if self.image_stem.ends_with(".png") {
            let path = format!("/images/members/{}", self.image_stem);
            MemberImages {
                preview: path.clone(),
                list: path.clone(),
                detail: path,
            }
        } else {
            MemberImages {
                preview: format!("/images/members/{}_box-768x768.jpg", self.image_stem),
                list: format!("/images/members/{}_box-300x300.jpg", self.image_stem),
                detail: format!("/images/members/{}.jpg", self.image_stem),
            }
        };
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|item| (*item).to_owned()).collect()
        };
        let member = StaffMember {
            id,
            name: self.name.to_owned(),
            position: self.position.to_owned(),
            department: self.department.to_owned(),
            images,
            bio: (!self.bio.is_empty()).then(|| self.bio.to_owned()),
            education: owned(self.education),
            experience: owned(self.experience),
            expertise: owned(self.expertise),
        };
        (id, member)
    }
}

const MEMBER_SEEDS: &[MemberSeed] = &[
    MemberSeed {
        id: 1,
        name: "김성호",
        position: "Kim, Sung ho. Patent Attorney.",
        department: "대표 변리사",
        image_stem: "kimsungho",
        bio: "KAIST 전기전자공학 전공 출신으로 국내외 특허 실무 경험이 풍부한 변리사입니다. 한국어, 영어, 일본어 3개 국어를 활용하여 국제 특허 업무를 수행하고 있습니다.",
        education: &["KAIST 전기전자공학 학사", "KAIST 전기전자공학 석사"],
        experience: &[
            "제33회 변리사 시험 합격",
            "김&장 법률사무소",
            "일본 Shinjyu Global IP",
            "벤처법률지원센터",
            "Anderson Mori & Tomotsune",
        ],
        expertise: &[
            "대기업·중견기업 특허출원·심판·소송",
            "특허컨설팅",
            "일본기업 특허컨설팅",
            "국내외 특허출원",
            "3개 국어 활용 업무",
        ],
    },
    MemberSeed {
        id: 2,
        name: "손재용",
        position: "Son, Jae Yong. Patent Attorney.",
        department: "대표 변리사",
        image_stem: "sonjaeyong",
        bio: "KAIST 기계공학 전공 출신으로 표준특허 발굴 및 대학연구소 특허 업무에 전문성을 갖춘 변리사입니다. 한국어, 영어, 일본어 3개 국어를 활용하여 국제 특허 업무를 수행하고 있습니다.",
        education: &["KAIST 기계공학 학사", "KAIST 자동화 및 설계공학 석사"],
        experience: &[
            "제40회 변리사 시험 합격",
            "대우중공업 철도차량연구소",
            "프랑스 ALSTOM사 기술연수",
            "前) 일본 Shinjyu Global IP",
        ],
        expertise: &[
            "표준특허 발굴·등록",
            "대학연구소 특허출원·심판·소송",
            "특허컨설팅",
            "일본기업 특허컨설팅",
            "국내외 특허출원",
            "3개 국어 활용 업무",
        ],
    },
    MemberSeed {
        id: 3,
        name: "박양호",
        position: "Park, Yang ho. Patent Attorney.",
        department: "파트너 변리사",
        image_stem: "parkyangho",
        bio: "광운대 전기공학, 고려대 전자컴퓨터공학 전공 출신으로 스타트업 및 중소/중견기업의 특허 업무에 전문성을 갖춘 변리사입니다. 상표 및 디자인 컨설팅 분야에서도 풍부한 경험을 보유하고 있습니다.",
        education: &["광운대 전기공학 학사", "고려대 전자컴퓨터공학 석사"],
        experience: &[
            "대한전선㈜ 전력기기기술개발팀",
            "제39회 변리사 시험 합격",
            "로얄특허법인",
            "위드특허법률사무소 대표",
            "경기지역 창업보육센타 특허컨설팅 자문역",
        ],
        expertise: &[
            "스타트업·중소/중견기업 특허컨설팅",
            "특허심판·특허소송",
            "상표/디자인 컨설팅",
        ],
    },
    MemberSeed {
        id: 4,
        name: "오용택",
        position: "Oh, Yong Taek. Senior Expert.",
        department: "수석",
        image_stem: "ohyongtaek",
        bio: "서울과학기술대학교 전자정보공학 전공 출신으로 전기, 전자, 통신, 반도체 분야의 표준특허 발굴 및 등록에 전문성을 갖춘 수석입니다.",
        education: &["서울과학기술대학교 전자정보공학 학사"],
        experience: &["COSS-KNP"],
        expertise: &[
            "표준특허 발굴·등록",
            "전기·전자·통신·반도체",
            "디스플레이·LED 패키지·조명",
            "터치센서·압력센서·머신러닝",
            "기계·기구 특허 컨설팅",
            "특허 출원",
            "국제특허 출원",
        ],
    },
    MemberSeed {
        id: 5,
        name: "문현돈",
        position: "Moon, Hyun Don. Patent Attorney.",
        department: "변리사",
        image_stem: "moonhyundon",
        bio: "고려대학교 화공생명공학 전공 출신으로 바이오테크 및 인공지능 기술 분야의 특허 업무에 전문성을 갖춘 변리사입니다. 기술가치 평가 업무도 수행하고 있습니다.",
        education: &["고려대학교 화공생명공학과 학사"],
        experience: &["COSS-KNP 특허 변리사"],
        expertise: &[
            "표준특허 발굴·등록",
            "응용생화학·고분자화학·나노화학공학",
            "반도체공학·생물공정공학·석유공업화학",
            "바이오테크 및 머신러닝/딥러닝모델",
            "인공지능 기술",
            "특허 컨설팅·특허 출원·기술가치 평가",
            "국제특허 출원",
        ],
    },
    MemberSeed {
        id: 6,
        name: "성진솔",
        position: "Sung, Jin Sol. Patent Attorney.",
        department: "변리사",
        image_stem: "sungjinsol",
        bio: "중앙대학교 화학신소재공학부 전공 출신으로 전자재료, 유기재료, 고분자재료 분야의 특허 업무에 전문성을 갖춘 변리사입니다. 상표 및 디자인 분야도 다루고 있습니다.",
        education: &["중앙대학교 화학신소재공학부 학사"],
        experience: &["COSS-KNP 특허 변리사"],
        expertise: &[
            "표준특허 발굴·등록",
            "전자재료·유기재료·고분자재료·에너지소재",
            "Chemical reaction engineering",
            "생체재료·공정시스템·나노재료",
            "특허컨설팅·특허 출원·특허 심판",
            "상표·디자인",
        ],
    },
    MemberSeed {
        id: 7,
        name: "길진성",
        position: "Gil, Jin Sung. Patent Attorney.",
        department: "변리사",
        image_stem: "giljinsung",
        bio: "서울대학교 화학부 전공 출신으로 생체공학, 의료장비 분야 및 인공지능 기술 분야의 특허 업무에 전문성을 갖춘 변리사입니다. 기술가치 평가 업무도 수행하고 있습니다.",
        education: &["서울대학교 화학부 학사"],
        experience: &["COSS-KNP 특허 변리사"],
        expertise: &[
            "표준특허 발굴·등록",
            "생체공학·의료장비·광공학",
            "인공지능·머신러닝·딥러닝",
            "유/무기화학·분자생화학·고분자화학·나노소재화학",
            "특허 컨설팅·특허 출원·기술가치 평가",
            "국제특허 출원",
        ],
    },
    MemberSeed {
        id: 8,
        name: "최충헌",
        position: "Choi, Chung Hon. Patent Attorney.",
        department: "변리사",
        image_stem: "choi.png",
        bio: "숭실대학교 의생명시스템학부 및 정보통계보험수리학 학사 출신으로, 생명공학, 생명정보학, 머신러닝/딥러닝 기술 분야의 특허 업무에 전문성을 갖춘 변리사입니다. 특허 컨설팅 및 국내외 특허 출원은 물론, 기술가치 평가 업무도 수행하고 있습니다.",
        education: &["숭실대 의생명시스템학부 학사", "숭실대 정보통계보험수리학과 학사"],
        experience: &["COSS-KNP 특허 변리사"],
        expertise: &[
            "생명공학(BT)",
            "생명정보학(BI)",
            "머신러닝/딥러닝",
            "특허 컨설팅",
            "특허 출원",
            "기술가치 평가",
            "국제특허 출원",
        ],
    },
    MemberSeed {
        id: 9,
        name: "무라카미 코이치",
        position: "Murakami, Koichi. KNP Advisor.",
        department: "차장",
        image_stem: "murakami.png",
        bio: "주로 일본에서의 한국 업무 관리, 클라이언트와의 연락, 특허 명세서 번역을 담당하고 있습니다.",
        education: &[],
        experience: &[
            "대일국제특허법률사무소(2002~2003)",
            "최김특허사무소(2003~2012)",
            "현) COSS-KNP특허법률사무소(2012~현재)",
        ],
        expertise: &[],
    },
];
