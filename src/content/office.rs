use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeAddress {
    pub street: String,
    pub building: String,
    pub postal_code: String,
    pub full_address: String,
    /// External "open in maps" link. The embedded map widget is owned by the host.
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeContact {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub weekday: String,
    pub lunch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeInfo {
    pub address: OfficeAddress,
    pub contact: OfficeContact,
    pub business_hours: BusinessHours,
    pub email_availability: String,
    pub email_response_time: String,
}

impl OfficeInfo {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            address: OfficeAddress {
                street: "서울특별시 강남구 도곡로 111".to_owned(),
                building: "미진빌딩 5층".to_owned(),
                postal_code: "06253".to_owned(),
                full_address: "서울특별시 강남구 도곡로 111 미진빌딩".to_owned(),
                map_url: "https://www.google.com/maps/search/?api=1&query=서울특별시+강남구+도곡로+111+미진빌딩".to_owned(),
            },
            contact: OfficeContact {
                phone: "02-552-8381".to_owned(),
                email: "mail@coss-knp.com".to_owned(),
            },
            business_hours: BusinessHours {
                weekday: "평일 09:00 - 18:00".to_owned(),
                lunch: "점심시간 12:00 - 13:00".to_owned(),
            },
            email_availability: "24시간 접수 가능".to_owned(),
            email_response_time: "영업일 기준 24시간 이내 답변".to_owned(),
        }
    }
}
