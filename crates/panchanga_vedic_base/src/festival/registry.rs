//! The built-in festival rules, keyed to the amanta month.

use super::rule::{FestivalCategory as C, FestivalRule as R, RuleName, Trigger as T};
use crate::masa::Masa::{self, *};
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;
use crate::tithi::Paksha;

const EKADASHI_NAMES: [[&str; 2]; 12] = [
    ["Kamada Ekadashi", "Varuthini Ekadashi"],
    ["Mohini Ekadashi", "Apara Ekadashi"],
    ["Nirjala Ekadashi", "Yogini Ekadashi"],
    ["Devshayani Ekadashi", "Kamika Ekadashi"],
    ["Shravana Putrada Ekadashi", "Aja Ekadashi"],
    ["Parsva Ekadashi", "Indira Ekadashi"],
    ["Papankusha Ekadashi", "Rama Ekadashi"],
    ["Devutthana Ekadashi", "Utpanna Ekadashi"],
    ["Mokshada Ekadashi", "Saphala Ekadashi"],
    ["Pausha Putrada Ekadashi", "Shattila Ekadashi"],
    ["Jaya Ekadashi", "Vijaya Ekadashi"],
    ["Amalaki Ekadashi", "Papmochani Ekadashi"],
];

/// Name of the Ekadashi falling in `paksha` of amanta `masa`.
pub const fn ekadashi_name(masa: Masa, paksha: Paksha) -> &'static str {
    let column = match paksha {
        Paksha::Shukla => 0,
        Paksha::Krishna => 1,
    };
    EKADASHI_NAMES[masa.index() as usize][column]
}

const SANKRANTI_NAMES: [&str; 12] = [
    "Mesh Sankranti",
    "Vrishabh Sankranti",
    "Mithun Sankranti",
    "Kark Sankranti",
    "Simha Sankranti",
    "Kanya Sankranti",
    "Tula Sankranti",
    "Vrischik Sankranti",
    "Dhanu Sankranti",
    "Makar Sankranti",
    "Kumbh Sankranti",
    "Meen Sankranti",
];

/// Name of the Sun's ingress into `rashi`.
pub const fn sankranti_name(rashi: Rashi) -> &'static str {
    SANKRANTI_NAMES[rashi.index() as usize]
}

const fn on(masa: Masa, tithi: u8) -> T {
    T::TithiInMasa { masa, tithi }
}

const NORTH: &[&str] = &["North India"];
const TAMIL: &[&str] = &["Tamil Nadu"];

const NAVARATRI_DAYS: &[&str] = &[
    "Shailaputri",
    "Brahmacharini",
    "Chandraghanta",
    "Kushmanda",
    "Skandamata",
    "Katyayani",
    "Kalaratri",
    "Mahagauri",
    "Siddhidatri",
];

const PONGAL_DAYS: &[&str] = &["Bhogi", "Thai Pongal", "Mattu Pongal", "Kaanum Pongal"];

static RULES: &[R] = &[
    // Chaitra
    R::new("ugadi", "Ugadi / Gudi Padwa", on(Chaitra, 1), C::Major)
        .described("Lunisolar new year")
        .regions(&["Karnataka", "Andhra Pradesh", "Telangana", "Maharashtra"]),
    R::new("chaitra_navratri", "Chaitra Navratri Ghatasthapana", on(Chaitra, 1), C::Minor),
    R::new("gangaur", "Gangaur", on(Chaitra, 3), C::Regional).regions(&["Rajasthan"]),
    R::new("yamuna_chhath", "Yamuna Chhath", on(Chaitra, 6), C::Minor),
    R::new("rama_navami", "Rama Navami", on(Chaitra, 9), C::Jayanti).fasting(),
    R::new("hanuman_jayanti", "Hanuman Jayanti", on(Chaitra, 15), C::Jayanti),
    // Vaishakha
    R::new("akshaya_tritiya", "Akshaya Tritiya", on(Vaishakha, 3), C::Major),
    R::new("parashurama_jayanti", "Parashurama Jayanti", on(Vaishakha, 3), C::Jayanti),
    R::new("ganga_saptami", "Ganga Saptami", on(Vaishakha, 7), C::Minor),
    R::new("sita_navami", "Sita Navami", on(Vaishakha, 9), C::Jayanti),
    R::new("narasimha_jayanti", "Narasimha Jayanti", on(Vaishakha, 14), C::Jayanti).fasting(),
    R::new("buddha_purnima", "Buddha Purnima", on(Vaishakha, 15), C::Major),
    R::new("narada_jayanti", "Narada Jayanti", on(Vaishakha, 16), C::Jayanti),
    // Jyeshtha
    R::new("mahesh_navami", "Mahesh Navami", on(Jyeshtha, 9), C::Regional).regions(&["Rajasthan"]),
    R::new("ganga_dussehra", "Ganga Dussehra", on(Jyeshtha, 10), C::Major),
    R::new("vat_purnima", "Vat Purnima Vrat", on(Jyeshtha, 15), C::Vrat)
        .fasting()
        .regions(&["Maharashtra", "Gujarat", "Karnataka"]),
    R::new("vat_savitri", "Vat Savitri Vrat", on(Jyeshtha, 30), C::Vrat)
        .fasting()
        .regions(NORTH),
    R::new("shani_jayanti", "Shani Jayanti", on(Jyeshtha, 30), C::Jayanti),
    // Ashadha
    R::new("rathyatra", "Jagannath Rathyatra", on(Ashadha, 2), C::Regional).regions(&["Odisha"]),
    R::new("guru_purnima", "Guru Purnima", on(Ashadha, 15), C::Major),
    // Shravana
    R::new("hariyali_teej", "Hariyali Teej", on(Shravana, 3), C::Regional).regions(NORTH),
    R::new("nag_panchami", "Nag Panchami", on(Shravana, 5), C::Major),
    R::new("kalki_jayanti", "Kalki Jayanti", on(Shravana, 5), C::Jayanti),
    R::new("raksha_bandhan", "Raksha Bandhan", on(Shravana, 15), C::Major),
    R::new("hayagriva_jayanti", "Hayagriva Jayanti", on(Shravana, 15), C::Jayanti),
    R::new("narali_purnima", "Narali Purnima", on(Shravana, 15), C::Regional)
        .regions(&["Maharashtra", "Goa"]),
    R::new("kajari_teej", "Kajari Teej", on(Shravana, 18), C::Regional).regions(NORTH),
    R::new("janmashtami", "Krishna Janmashtami", on(Shravana, 23), C::Major)
        .fasting()
        .described("Birth of Krishna"),
    // Bhadrapada
    R::new("hartalika_teej", "Hartalika Teej", on(Bhadrapada, 3), C::Vrat).fasting(),
    R::new("ganesh_chaturthi", "Ganesh Chaturthi", on(Bhadrapada, 4), C::Major),
    R::new("rishi_panchami", "Rishi Panchami", on(Bhadrapada, 5), C::Vrat),
    R::new("radha_ashtami", "Radha Ashtami", on(Bhadrapada, 8), C::Jayanti),
    R::new("vamana_jayanti", "Vamana Jayanti", on(Bhadrapada, 12), C::Jayanti),
    R::new("anant_chaturdashi", "Anant Chaturdashi", on(Bhadrapada, 14), C::Major)
        .described("Ganesh Visarjan"),
    R::new("pitru_paksha", "Purnima Shraddha (Pitru Paksha Begins)", on(Bhadrapada, 15), C::Minor),
    R::new("jivitputrika", "Jivitputrika Vrat", on(Bhadrapada, 23), C::Vrat)
        .fasting()
        .regions(&["Bihar", "Uttar Pradesh", "Jharkhand"]),
    R::new("mahalaya", "Sarva Pitru Amavasya (Mahalaya)", on(Bhadrapada, 30), C::Major),
    // Ashwina
    R::new(
        "navaratri",
        "Navaratri",
        T::TithiSpan {
            masa: Ashwina,
            start: 1,
            day_names: NAVARATRI_DAYS,
        },
        C::Major,
    )
    .described("Nine nights of the Goddess"),
    R::new("durga_ashtami", "Durga Ashtami", on(Ashwina, 8), C::Major),
    R::new("maha_navami", "Maha Navami", on(Ashwina, 9), C::Major),
    R::new("dussehra", "Vijaya Dashami (Dussehra)", on(Ashwina, 10), C::Major),
    R::new("sharad_purnima", "Sharad Purnima", on(Ashwina, 15), C::Major),
    R::new("valmiki_jayanti", "Valmiki Jayanti", on(Ashwina, 15), C::Jayanti),
    R::new("karwa_chauth", "Karwa Chauth", on(Ashwina, 19), C::Vrat)
        .fasting()
        .regions(NORTH),
    R::new("ahoi_ashtami", "Ahoi Ashtami", on(Ashwina, 23), C::Vrat).regions(NORTH),
    R::new("dhanteras", "Dhanteras", on(Ashwina, 28), C::Major),
    R::new("naraka_chaturdashi", "Naraka Chaturdashi", on(Ashwina, 29), C::Major),
    R::new("diwali", "Diwali (Lakshmi Puja)", on(Ashwina, 30), C::Major)
        .at_sunset()
        .described("Lakshmi Puja in the Pradosha after sunset"),
    // Kartika
    R::new("govardhan_puja", "Govardhan Puja", on(Kartika, 1), C::Major),
    R::new("bali_pratipada", "Bali Pratipada", on(Kartika, 1), C::Regional)
        .regions(&["Maharashtra", "Karnataka"]),
    R::new("bhai_dooj", "Bhai Dooj", on(Kartika, 2), C::Major),
    R::new("chhath", "Chhath Puja", on(Kartika, 6), C::Regional)
        .fasting()
        .regions(&["Bihar", "Jharkhand", "Uttar Pradesh"]),
    R::new("tulasi_vivah", "Tulasi Vivah", on(Kartika, 12), C::Minor),
    R::new("kartik_purnima", "Kartik Purnima / Dev Diwali", on(Kartika, 15), C::Major),
    // Margashirsha
    R::new("gita_jayanti", "Gita Jayanti", on(Margashirsha, 11), C::Jayanti),
    R::new("dattatreya_jayanti", "Dattatreya Jayanti", on(Margashirsha, 15), C::Jayanti),
    // Magha
    R::new("vasant_panchami", "Vasant Panchami", on(Magha, 5), C::Major),
    R::new("ratha_saptami", "Ratha Saptami", on(Magha, 7), C::Major),
    R::new("maha_shivaratri", "Maha Shivaratri", on(Magha, 29), C::Major)
        .at_sunset()
        .fasting()
        .described("Night vigil of Shiva; observed on the day whose night carries Chaturdashi")
        .supersedes(&["masik_shivaratri"]),
    // Phalguna
    R::new("holika_dahan", "Holika Dahan", on(Phalguna, 15), C::Major).at_sunset(),
    R::new("ranga_panchami", "Ranga Panchami", on(Phalguna, 20), C::Regional)
        .regions(&["Maharashtra", "Madhya Pradesh"]),
    R::new("sheetala_ashtami", "Sheetala Ashtami", on(Phalguna, 23), C::Regional).regions(NORTH),
    // Recurring lunar observances
    R::new("ekadashi", "Ekadashi", T::Tithi { tithis: &[11, 26] }, C::Ekadashi)
        .named(RuleName::EkadashiByMasa)
        .fasting()
        .observe_in_adhika(),
    R::new("pradosham_shukla", "Pradosham (Shukla)", T::Tithi { tithis: &[13] }, C::Vrat)
        .fasting()
        .observe_in_adhika(),
    R::new("pradosham_krishna", "Pradosham (Krishna)", T::Tithi { tithis: &[28] }, C::Vrat)
        .fasting()
        .observe_in_adhika(),
    R::new("sankashti_chaturthi", "Sankashti Chaturthi", T::Tithi { tithis: &[19] }, C::Vrat)
        .fasting()
        .observe_in_adhika(),
    R::new("masik_shivaratri", "Masik Shivaratri", T::Tithi { tithis: &[29] }, C::Vrat)
        .fasting()
        .observe_in_adhika(),
    R::new("purnima", "Purnima", T::Tithi { tithis: &[15] }, C::Minor).observe_in_adhika(),
    R::new("amavasya", "Amavasya", T::Tithi { tithis: &[30] }, C::Minor).observe_in_adhika(),
    // Nakshatra-based
    R::new(
        "onam",
        "Onam (Thiruvonam)",
        T::Nakshatra {
            nakshatra: Nakshatra::Shravana,
            solar_rashi: Some(Rashi::Simha),
        },
        C::Regional,
    )
    .regions(&["Kerala"]),
    R::new(
        "thiruvathira",
        "Thiruvathira",
        T::Nakshatra {
            nakshatra: Nakshatra::Ardra,
            solar_rashi: Some(Rashi::Dhanu),
        },
        C::Regional,
    )
    .regions(&["Kerala", "Tamil Nadu"]),
    R::new(
        "karthigai_deepam",
        "Karthigai Deepam",
        T::Nakshatra {
            nakshatra: Nakshatra::Krittika,
            solar_rashi: Some(Rashi::Vrischika),
        },
        C::Regional,
    )
    .regions(TAMIL),
    // Solar
    R::new("sankranti", "Sankranti", T::Sankranti { rashi: None }, C::Solar)
        .named(RuleName::SankrantiByRashi),
    R::new(
        "makar_sankranti",
        "Makar Sankranti",
        T::Sankranti {
            rashi: Some(Rashi::Makara),
        },
        C::Major,
    )
    .described("Sun enters Makara; Uttarayana begins by the sidereal reckoning")
    .supersedes(&["sankranti"]),
    R::new(
        "pongal",
        "Pongal",
        T::SankrantiSpan {
            rashi: Rashi::Makara,
            first_offset: -1,
            day_names: PONGAL_DAYS,
        },
        C::Regional,
    )
    .regions(TAMIL),
    R::new(
        "vishu",
        "Vishu",
        T::Sankranti {
            rashi: Some(Rashi::Mesha),
        },
        C::Regional,
    )
    .regions(&["Kerala"]),
    R::new(
        "baisakhi",
        "Baisakhi",
        T::Sankranti {
            rashi: Some(Rashi::Mesha),
        },
        C::Regional,
    )
    .regions(&["Punjab"]),
];

/// Every built-in rule, in evaluation order.
pub fn default_rules() -> &'static [R] {
    RULES
}

/// Look a built-in rule up by id.
pub fn rule_by_id(id: &str) -> Option<&'static R> {
    RULES.iter().find(|r| r.id == id)
}
