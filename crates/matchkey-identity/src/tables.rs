//! Region and country code tables.
//!
//! Keys are lowercase with all whitespace removed, the same shape the
//! normalizer produces, so "New York" is looked up as `newyork`. Every
//! canonical code is also a key mapping to itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// US states, DC and inhabited territories: (name, code, extra variants).
const REGIONS: &[(&str, &str, &[&str])] = &[
    ("alabama", "al", &["ala"]),
    ("alaska", "ak", &[]),
    ("arizona", "az", &["ariz"]),
    ("arkansas", "ar", &["ark"]),
    ("california", "ca", &["calif", "cal"]),
    ("colorado", "co", &["colo"]),
    ("connecticut", "ct", &["conn"]),
    ("delaware", "de", &["del"]),
    ("district of columbia", "dc", &["washington dc", "washington d.c.", "d.c."]),
    ("florida", "fl", &["fla"]),
    ("georgia", "ga", &[]),
    ("hawaii", "hi", &[]),
    ("idaho", "id", &[]),
    ("illinois", "il", &["ill"]),
    ("indiana", "in", &["ind"]),
    ("iowa", "ia", &[]),
    ("kansas", "ks", &["kan", "kans"]),
    ("kentucky", "ky", &["ken"]),
    ("louisiana", "la", &[]),
    ("maine", "me", &[]),
    ("maryland", "md", &[]),
    ("massachusetts", "ma", &["mass"]),
    ("michigan", "mi", &["mich"]),
    ("minnesota", "mn", &["minn"]),
    ("mississippi", "ms", &["miss"]),
    ("missouri", "mo", &[]),
    ("montana", "mt", &["mont"]),
    ("nebraska", "ne", &["neb", "nebr"]),
    ("nevada", "nv", &["nev"]),
    ("new hampshire", "nh", &["n.h."]),
    ("new jersey", "nj", &["n.j."]),
    ("new mexico", "nm", &["n.m.", "n.mex."]),
    ("new york", "ny", &["n.y."]),
    ("north carolina", "nc", &["n.c."]),
    ("north dakota", "nd", &["n.d.", "n.dak."]),
    ("ohio", "oh", &[]),
    ("oklahoma", "ok", &["okla"]),
    ("oregon", "or", &["ore"]),
    ("pennsylvania", "pa", &["penn", "penna"]),
    ("rhode island", "ri", &["r.i."]),
    ("south carolina", "sc", &["s.c."]),
    ("south dakota", "sd", &["s.d.", "s.dak."]),
    ("tennessee", "tn", &["tenn"]),
    ("texas", "tx", &["tex"]),
    ("utah", "ut", &[]),
    ("vermont", "vt", &[]),
    ("virginia", "va", &[]),
    ("washington", "wa", &["wash"]),
    ("west virginia", "wv", &["w.va."]),
    ("wisconsin", "wi", &["wis", "wisc"]),
    ("wyoming", "wy", &["wyo"]),
    ("american samoa", "as", &[]),
    ("guam", "gu", &[]),
    ("northern mariana islands", "mp", &[]),
    ("puerto rico", "pr", &[]),
    ("united states virgin islands", "vi", &["us virgin islands", "u.s. virgin islands"]),
];

/// ISO 3166-1 countries: (short name, alpha-2, alpha-3).
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("afghanistan", "af", "afg"),
    ("aland islands", "ax", "ala"),
    ("albania", "al", "alb"),
    ("algeria", "dz", "dza"),
    ("american samoa", "as", "asm"),
    ("andorra", "ad", "and"),
    ("angola", "ao", "ago"),
    ("anguilla", "ai", "aia"),
    ("antarctica", "aq", "ata"),
    ("antigua and barbuda", "ag", "atg"),
    ("argentina", "ar", "arg"),
    ("armenia", "am", "arm"),
    ("aruba", "aw", "abw"),
    ("australia", "au", "aus"),
    ("austria", "at", "aut"),
    ("azerbaijan", "az", "aze"),
    ("bahamas", "bs", "bhs"),
    ("bahrain", "bh", "bhr"),
    ("bangladesh", "bd", "bgd"),
    ("barbados", "bb", "brb"),
    ("belarus", "by", "blr"),
    ("belgium", "be", "bel"),
    ("belize", "bz", "blz"),
    ("benin", "bj", "ben"),
    ("bermuda", "bm", "bmu"),
    ("bhutan", "bt", "btn"),
    ("bolivia", "bo", "bol"),
    ("bonaire, sint eustatius and saba", "bq", "bes"),
    ("bosnia and herzegovina", "ba", "bih"),
    ("botswana", "bw", "bwa"),
    ("bouvet island", "bv", "bvt"),
    ("brazil", "br", "bra"),
    ("british indian ocean territory", "io", "iot"),
    ("brunei darussalam", "bn", "brn"),
    ("bulgaria", "bg", "bgr"),
    ("burkina faso", "bf", "bfa"),
    ("burundi", "bi", "bdi"),
    ("cabo verde", "cv", "cpv"),
    ("cambodia", "kh", "khm"),
    ("cameroon", "cm", "cmr"),
    ("canada", "ca", "can"),
    ("cayman islands", "ky", "cym"),
    ("central african republic", "cf", "caf"),
    ("chad", "td", "tcd"),
    ("chile", "cl", "chl"),
    ("china", "cn", "chn"),
    ("christmas island", "cx", "cxr"),
    ("cocos (keeling) islands", "cc", "cck"),
    ("colombia", "co", "col"),
    ("comoros", "km", "com"),
    ("congo", "cg", "cog"),
    ("democratic republic of the congo", "cd", "cod"),
    ("cook islands", "ck", "cok"),
    ("costa rica", "cr", "cri"),
    ("cote d'ivoire", "ci", "civ"),
    ("croatia", "hr", "hrv"),
    ("cuba", "cu", "cub"),
    ("curacao", "cw", "cuw"),
    ("cyprus", "cy", "cyp"),
    ("czechia", "cz", "cze"),
    ("denmark", "dk", "dnk"),
    ("djibouti", "dj", "dji"),
    ("dominica", "dm", "dma"),
    ("dominican republic", "do", "dom"),
    ("ecuador", "ec", "ecu"),
    ("egypt", "eg", "egy"),
    ("el salvador", "sv", "slv"),
    ("equatorial guinea", "gq", "gnq"),
    ("eritrea", "er", "eri"),
    ("estonia", "ee", "est"),
    ("eswatini", "sz", "swz"),
    ("ethiopia", "et", "eth"),
    ("falkland islands", "fk", "flk"),
    ("faroe islands", "fo", "fro"),
    ("fiji", "fj", "fji"),
    ("finland", "fi", "fin"),
    ("france", "fr", "fra"),
    ("french guiana", "gf", "guf"),
    ("french polynesia", "pf", "pyf"),
    ("french southern territories", "tf", "atf"),
    ("gabon", "ga", "gab"),
    ("gambia", "gm", "gmb"),
    ("georgia", "ge", "geo"),
    ("germany", "de", "deu"),
    ("ghana", "gh", "gha"),
    ("gibraltar", "gi", "gib"),
    ("greece", "gr", "grc"),
    ("greenland", "gl", "grl"),
    ("grenada", "gd", "grd"),
    ("guadeloupe", "gp", "glp"),
    ("guam", "gu", "gum"),
    ("guatemala", "gt", "gtm"),
    ("guernsey", "gg", "ggy"),
    ("guinea", "gn", "gin"),
    ("guinea-bissau", "gw", "gnb"),
    ("guyana", "gy", "guy"),
    ("haiti", "ht", "hti"),
    ("heard island and mcdonald islands", "hm", "hmd"),
    ("holy see", "va", "vat"),
    ("honduras", "hn", "hnd"),
    ("hong kong", "hk", "hkg"),
    ("hungary", "hu", "hun"),
    ("iceland", "is", "isl"),
    ("india", "in", "ind"),
    ("indonesia", "id", "idn"),
    ("iran", "ir", "irn"),
    ("iraq", "iq", "irq"),
    ("ireland", "ie", "irl"),
    ("isle of man", "im", "imn"),
    ("israel", "il", "isr"),
    ("italy", "it", "ita"),
    ("jamaica", "jm", "jam"),
    ("japan", "jp", "jpn"),
    ("jersey", "je", "jey"),
    ("jordan", "jo", "jor"),
    ("kazakhstan", "kz", "kaz"),
    ("kenya", "ke", "ken"),
    ("kiribati", "ki", "kir"),
    ("north korea", "kp", "prk"),
    ("south korea", "kr", "kor"),
    ("kuwait", "kw", "kwt"),
    ("kyrgyzstan", "kg", "kgz"),
    ("laos", "la", "lao"),
    ("latvia", "lv", "lva"),
    ("lebanon", "lb", "lbn"),
    ("lesotho", "ls", "lso"),
    ("liberia", "lr", "lbr"),
    ("libya", "ly", "lby"),
    ("liechtenstein", "li", "lie"),
    ("lithuania", "lt", "ltu"),
    ("luxembourg", "lu", "lux"),
    ("macao", "mo", "mac"),
    ("madagascar", "mg", "mdg"),
    ("malawi", "mw", "mwi"),
    ("malaysia", "my", "mys"),
    ("maldives", "mv", "mdv"),
    ("mali", "ml", "mli"),
    ("malta", "mt", "mlt"),
    ("marshall islands", "mh", "mhl"),
    ("martinique", "mq", "mtq"),
    ("mauritania", "mr", "mrt"),
    ("mauritius", "mu", "mus"),
    ("mayotte", "yt", "myt"),
    ("mexico", "mx", "mex"),
    ("micronesia", "fm", "fsm"),
    ("moldova", "md", "mda"),
    ("monaco", "mc", "mco"),
    ("mongolia", "mn", "mng"),
    ("montenegro", "me", "mne"),
    ("montserrat", "ms", "msr"),
    ("morocco", "ma", "mar"),
    ("mozambique", "mz", "moz"),
    ("myanmar", "mm", "mmr"),
    ("namibia", "na", "nam"),
    ("nauru", "nr", "nru"),
    ("nepal", "np", "npl"),
    ("netherlands", "nl", "nld"),
    ("new caledonia", "nc", "ncl"),
    ("new zealand", "nz", "nzl"),
    ("nicaragua", "ni", "nic"),
    ("niger", "ne", "ner"),
    ("nigeria", "ng", "nga"),
    ("niue", "nu", "niu"),
    ("norfolk island", "nf", "nfk"),
    ("north macedonia", "mk", "mkd"),
    ("northern mariana islands", "mp", "mnp"),
    ("norway", "no", "nor"),
    ("oman", "om", "omn"),
    ("pakistan", "pk", "pak"),
    ("palau", "pw", "plw"),
    ("palestine", "ps", "pse"),
    ("panama", "pa", "pan"),
    ("papua new guinea", "pg", "png"),
    ("paraguay", "py", "pry"),
    ("peru", "pe", "per"),
    ("philippines", "ph", "phl"),
    ("pitcairn", "pn", "pcn"),
    ("poland", "pl", "pol"),
    ("portugal", "pt", "prt"),
    ("puerto rico", "pr", "pri"),
    ("qatar", "qa", "qat"),
    ("reunion", "re", "reu"),
    ("romania", "ro", "rou"),
    ("russia", "ru", "rus"),
    ("rwanda", "rw", "rwa"),
    ("saint barthelemy", "bl", "blm"),
    ("saint helena, ascension and tristan da cunha", "sh", "shn"),
    ("saint kitts and nevis", "kn", "kna"),
    ("saint lucia", "lc", "lca"),
    ("saint martin", "mf", "maf"),
    ("saint pierre and miquelon", "pm", "spm"),
    ("saint vincent and the grenadines", "vc", "vct"),
    ("samoa", "ws", "wsm"),
    ("san marino", "sm", "smr"),
    ("sao tome and principe", "st", "stp"),
    ("saudi arabia", "sa", "sau"),
    ("senegal", "sn", "sen"),
    ("serbia", "rs", "srb"),
    ("seychelles", "sc", "syc"),
    ("sierra leone", "sl", "sle"),
    ("singapore", "sg", "sgp"),
    ("sint maarten", "sx", "sxm"),
    ("slovakia", "sk", "svk"),
    ("slovenia", "si", "svn"),
    ("solomon islands", "sb", "slb"),
    ("somalia", "so", "som"),
    ("south africa", "za", "zaf"),
    ("south georgia and the south sandwich islands", "gs", "sgs"),
    ("south sudan", "ss", "ssd"),
    ("spain", "es", "esp"),
    ("sri lanka", "lk", "lka"),
    ("sudan", "sd", "sdn"),
    ("suriname", "sr", "sur"),
    ("svalbard and jan mayen", "sj", "sjm"),
    ("sweden", "se", "swe"),
    ("switzerland", "ch", "che"),
    ("syria", "sy", "syr"),
    ("taiwan", "tw", "twn"),
    ("tajikistan", "tj", "tjk"),
    ("tanzania", "tz", "tza"),
    ("thailand", "th", "tha"),
    ("timor-leste", "tl", "tls"),
    ("togo", "tg", "tgo"),
    ("tokelau", "tk", "tkl"),
    ("tonga", "to", "ton"),
    ("trinidad and tobago", "tt", "tto"),
    ("tunisia", "tn", "tun"),
    ("turkey", "tr", "tur"),
    ("turkmenistan", "tm", "tkm"),
    ("turks and caicos islands", "tc", "tca"),
    ("tuvalu", "tv", "tuv"),
    ("uganda", "ug", "uga"),
    ("ukraine", "ua", "ukr"),
    ("united arab emirates", "ae", "are"),
    ("united kingdom", "gb", "gbr"),
    ("united states", "us", "usa"),
    ("united states minor outlying islands", "um", "umi"),
    ("uruguay", "uy", "ury"),
    ("uzbekistan", "uz", "uzb"),
    ("vanuatu", "vu", "vut"),
    ("venezuela", "ve", "ven"),
    ("vietnam", "vn", "vnm"),
    ("british virgin islands", "vg", "vgb"),
    ("united states virgin islands", "vi", "vir"),
    ("wallis and futuna", "wf", "wlf"),
    ("western sahara", "eh", "esh"),
    ("yemen", "ye", "yem"),
    ("zambia", "zm", "zmb"),
    ("zimbabwe", "zw", "zwe"),
];

/// Common alternate country names.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("united states of america", "us"),
    ("u.s.", "us"),
    ("u.s.a.", "us"),
    ("america", "us"),
    ("uk", "gb"),
    ("u.k.", "gb"),
    ("great britain", "gb"),
    ("britain", "gb"),
    ("england", "gb"),
    ("scotland", "gb"),
    ("wales", "gb"),
    ("northern ireland", "gb"),
    ("czech republic", "cz"),
    ("russian federation", "ru"),
    ("korea", "kr"),
    ("republic of korea", "kr"),
    ("viet nam", "vn"),
    ("ivory coast", "ci"),
    ("cape verde", "cv"),
    ("swaziland", "sz"),
    ("burma", "mm"),
    ("macedonia", "mk"),
    ("holland", "nl"),
    ("the netherlands", "nl"),
    ("turkiye", "tr"),
    ("uae", "ae"),
    ("brunei", "bn"),
    ("vatican", "va"),
    ("vatican city", "va"),
    ("east timor", "tl"),
    ("dr congo", "cd"),
    ("drc", "cd"),
    ("republic of the congo", "cg"),
    ("lao people's democratic republic", "la"),
    ("syrian arab republic", "sy"),
    ("iran, islamic republic of", "ir"),
    ("moldova, republic of", "md"),
    ("tanzania, united republic of", "tz"),
];

fn squash(key: &str) -> String {
    key.split_whitespace().collect()
}

static REGION_CODES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (name, code, variants) in REGIONS {
        map.insert(squash(name), *code);
        map.insert(code.to_string(), *code);
        for variant in *variants {
            map.insert(squash(variant), *code);
        }
    }
    map
});

static COUNTRY_CODES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (name, alpha2, alpha3) in COUNTRIES {
        map.insert(squash(name), *alpha2);
        map.insert(alpha2.to_string(), *alpha2);
        map.insert(alpha3.to_string(), *alpha2);
    }
    for (alias, alpha2) in COUNTRY_ALIASES {
        map.insert(squash(alias), *alpha2);
    }
    map
});

/// Look up the two-letter region code for a lowercase, whitespace-free key.
pub fn region_code(key: &str) -> Option<&'static str> {
    REGION_CODES.get(key).copied()
}

/// Look up the ISO alpha-2 country code for a lowercase, whitespace-free key.
pub fn country_code(key: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(region_code("california"), Some("ca"));
        assert_eq!(region_code("calif"), Some("ca"));
        assert_eq!(region_code("newyork"), Some("ny"));
        assert_eq!(region_code("n.y."), Some("ny"));
        assert_eq!(region_code("tx"), Some("tx"));
        assert_eq!(region_code("zzyzx"), None);
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(country_code("unitedstates"), Some("us"));
        assert_eq!(country_code("usa"), Some("us"));
        assert_eq!(country_code("unitedkingdom"), Some("gb"));
        assert_eq!(country_code("deu"), Some("de"));
        assert_eq!(country_code("cote d'ivoire"), None);
        assert_eq!(country_code("coted'ivoire"), Some("ci"));
        assert_eq!(country_code("atlantis"), None);
    }

    #[test]
    fn test_codes_are_fixed_points() {
        for code in REGION_CODES.values() {
            assert_eq!(region_code(code), Some(*code), "region {}", code);
        }
        for code in COUNTRY_CODES.values() {
            assert_eq!(country_code(code), Some(*code), "country {}", code);
        }
    }

    #[test]
    fn test_keys_are_normalized() {
        for key in REGION_CODES.keys().chain(COUNTRY_CODES.keys()) {
            assert!(!key.chars().any(char::is_whitespace), "{:?}", key);
            assert_eq!(key, &key.to_lowercase());
        }
    }
}
