// GST state codes
//
// The first two digits of every GSTIN name the registering state or union
// territory. An identifier whose prefix is not in this table is rejected.

use serde::Serialize;

/// One row of the GST state-code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateCode {
    /// Two-digit GST code, e.g. "27"
    pub code: &'static str,
    pub name: &'static str,
    pub is_union_territory: bool,
}

const fn state(code: &'static str, name: &'static str) -> StateCode {
    StateCode {
        code,
        name,
        is_union_territory: false,
    }
}

const fn territory(code: &'static str, name: &'static str) -> StateCode {
    StateCode {
        code,
        name,
        is_union_territory: true,
    }
}

pub const STATE_CODES: &[StateCode] = &[
    territory("01", "Jammu and Kashmir"),
    state("02", "Himachal Pradesh"),
    state("03", "Punjab"),
    territory("04", "Chandigarh"),
    state("05", "Uttarakhand"),
    state("06", "Haryana"),
    territory("07", "Delhi"),
    state("08", "Rajasthan"),
    state("09", "Uttar Pradesh"),
    state("10", "Bihar"),
    state("11", "Sikkim"),
    state("12", "Arunachal Pradesh"),
    state("13", "Nagaland"),
    state("14", "Manipur"),
    state("15", "Mizoram"),
    state("16", "Tripura"),
    state("17", "Meghalaya"),
    state("18", "Assam"),
    state("19", "West Bengal"),
    state("20", "Jharkhand"),
    state("21", "Odisha"),
    state("22", "Chhattisgarh"),
    state("23", "Madhya Pradesh"),
    state("24", "Gujarat"),
    territory("25", "Daman and Diu"),
    territory("26", "Dadra and Nagar Haveli and Daman and Diu"),
    state("27", "Maharashtra"),
    state("28", "Andhra Pradesh (Old)"),
    state("29", "Karnataka"),
    state("30", "Goa"),
    territory("31", "Lakshadweep"),
    state("32", "Kerala"),
    state("33", "Tamil Nadu"),
    territory("34", "Puducherry"),
    territory("35", "Andaman and Nicobar Islands"),
    state("36", "Telangana"),
    state("37", "Andhra Pradesh"),
    territory("38", "Ladakh"),
    territory("97", "Other Territory"),
    territory("99", "Centre Jurisdiction"),
];

/// Looks up a two-digit state code
pub fn state_code(code: &str) -> Option<&'static StateCode> {
    STATE_CODES.iter().find(|row| row.code == code)
}

pub fn is_known_state_code(code: &str) -> bool {
    state_code(code).is_some()
}
