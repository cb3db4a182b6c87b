//! Static catalog of mirrored filter lists.
//!
//! Mostly derived from the uBlock Origin asset registry. Changing the set of
//! lists is a code change; there is no runtime registration.

use crate::source_id::{file_name, source_id};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Category a list is shown under by the downstream consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterGroup {
    Default,
    Regional,
    Ads,
    Privacy,
    Malware,
    Social,
}

impl FilterGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterGroup::Default => "default",
            FilterGroup::Regional => "regional",
            FilterGroup::Ads => "ads",
            FilterGroup::Privacy => "privacy",
            FilterGroup::Malware => "malware",
            FilterGroup::Social => "social",
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mirrored list. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Hex SHA-256 of `url`; stem of the stored file.
    pub id: String,
    pub url: String,
    pub title: String,
    pub group: FilterGroup,
    pub enabled_by_default: bool,
}

impl Source {
    pub fn new(url: &str, title: &str, group: FilterGroup, enabled_by_default: bool) -> Self {
        Self {
            id: source_id(url),
            url: url.to_string(),
            title: title.to_string(),
            group,
            enabled_by_default,
        }
    }

    /// Stored file name, e.g. `<sha256>.txt`.
    pub fn file_name(&self) -> String {
        file_name(&self.id)
    }
}

/// Literal catalog row.
struct SourceSpec {
    url: &'static str,
    title: &'static str,
    group: FilterGroup,
    enabled_by_default: bool,
}

/// The built-in catalog in processing order. Built on first use.
pub fn catalog() -> &'static [Source] {
    static CATALOG: OnceLock<Vec<Source>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        SOURCES
            .iter()
            .map(|s| Source::new(s.url, s.title, s.group, s.enabled_by_default))
            .collect()
    })
}

const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/filters.txt",
        title: "uBlock filters",
        group: FilterGroup::Default,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/badware.txt",
        title: "uBlock filters - Badware risks",
        group: FilterGroup::Default,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/privacy.txt",
        title: "uBlock filters - Privacy",
        group: FilterGroup::Default,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/resource-abuse.txt",
        title: "uBlock filters - Resource abuse",
        group: FilterGroup::Default,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/unbreak.txt",
        title: "uBlock filters - Unbreak",
        group: FilterGroup::Default,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/2_without_easylist.txt",
        title: "AdGuard Base",
        group: FilterGroup::Ads,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/11.txt",
        title: "AdGuard Mobile Ads",
        group: FilterGroup::Ads,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist.to/easylist/easylist.txt",
        title: "EasyList",
        group: FilterGroup::Ads,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/3.txt",
        title: "AdGuard Tracking Protection",
        group: FilterGroup::Privacy,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/17.txt",
        title: "AdGuard URL Tracking Protection",
        group: FilterGroup::Privacy,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/lan-block.txt",
        title: "Block Outsider Intrusion into LAN",
        group: FilterGroup::Privacy,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist.to/easylist/easyprivacy.txt",
        title: "EasyPrivacy",
        group: FilterGroup::Privacy,
        enabled_by_default: true,
    },
    SourceSpec {
        url: "https://curben.gitlab.io/malware-filter/phishing-filter.txt",
        title: "Phishing URL Blocklist",
        group: FilterGroup::Malware,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://curben.gitlab.io/malware-filter/pup-filter.txt",
        title: "PUP Domains Blocklist",
        group: FilterGroup::Malware,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/14.txt",
        title: "AdGuard Annoyances",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/4.txt",
        title: "AdGuard Social Media",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://secure.fanboy.co.nz/fanboy-antifacebook.txt",
        title: "Anti-Facebook",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://secure.fanboy.co.nz/fanboy-annoyance.txt",
        title: "Fanboy's Annoyance",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://secure.fanboy.co.nz/fanboy-cookiemonster.txt",
        title: "EasyList Cookie",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist.to/easylist/fanboy-social.txt",
        title: "Fanboy's Social",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/annoyances.txt",
        title: "uBlock filters - Annoyances",
        group: FilterGroup::Social,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist-downloads.adblockplus.org/Liste_AR.txt",
        title: "ara: Liste AR",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://stanev.org/abp/adblock_bg.txt",
        title: "BGR: Bulgarian Adblock list",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/224.txt",
        title: "CHN: AdGuard Chinese (中文)",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/tomasko126/easylistczechandslovak/master/filters.txt",
        title: "CZE, SVK: EasyList Czech and Slovak",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist.to/easylistgermany/easylistgermany.txt",
        title: "DEU: EasyList Germany",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://adblock.ee/list.php",
        title: "EST: Eesti saitidele kohandatud filter",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/finnish-easylist-addition/finnish-easylist-addition/master/Finland_adb.txt",
        title: "FIN: Adblock List for Finland",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/16.txt",
        title: "FRA: AdGuard Français",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://www.void.gr/kargig/void-gr-filters.txt",
        title: "GRC: Greek AdBlock Filter",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/hufilter/hufilter/master/hufilter-ublock.txt",
        title: "HUN: hufilter",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/ABPindo/indonesianadblockrules/master/subscriptions/abpindo.txt",
        title: "IDN, MYS: ABPindo",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/farrokhi/adblock-iran/master/filter.txt",
        title: "IRN: Adblock-Iran",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://adblock.gardar.net/is.abp.txt",
        title: "ISL: Icelandic ABP List",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/easylist/EasyListHebrew/master/EasyListHebrew.txt",
        title: "ISR: EasyList Hebrew",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist-downloads.adblockplus.org/easylistitaly.txt",
        title: "ITA: EasyList Italy",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/gioxx/xfiles/master/filtri.txt",
        title: "ITA: ABP X Files",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/7.txt",
        title: "JPN: AdGuard Japanese",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/yous/YousList/master/youslist.txt",
        title: "KOR: YousList",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/EasyList-Lithuania/easylist_lithuania/master/easylistlithuania.txt",
        title: "LTU: EasyList Lithuania",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://notabug.org/latvian-list/adblock-latvian/raw/master/lists/latvian-list.txt",
        title: "LVA: Latvian List",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist-downloads.adblockplus.org/easylistdutch.txt",
        title: "NLD: EasyList Dutch",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/DandelionSprout/adfilt/master/NorwegianList.txt",
        title: "NOR, DNK, ISL: Dandelion Sprouts nordiske filtre",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/MajkiIT/polish-ads-filter/master/polish-adblock-filters/adblock.txt",
        title: "POL: Oficjalne Polskie Filtry do AdBlocka, uBlocka Origin i AdGuarda",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/olegwukr/polish-privacy-filters/master/anti-adblock.txt",
        title: "POL: Oficjalne polskie filtry przeciwko alertom o Adblocku",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://road.adblock.ro/lista.txt",
        title: "ROU: Romanian Ad (ROad) Block List Light",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist-downloads.adblockplus.org/advblock+cssfixes.txt",
        title: "RUS: RU AdList",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://easylist-downloads.adblockplus.org/easylistspanish.txt",
        title: "spa: EasyList Spanish",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/9.txt",
        title: "spa, por: AdGuard Spanish/Portuguese",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/betterwebleon/slovenian-list/master/filters.txt",
        title: "SVN: Slovenian List",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/lassekongo83/Frellwits-filter-lists/master/Frellwits-Swedish-Filter.txt",
        title: "SWE: Frellwit's Swedish Filter",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/easylist-thailand/easylist-thailand/master/subscription/easylist-thailand.txt",
        title: "THA: EasyList Thailand",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://filters.adtidy.org/extension/ublock/filters/13.txt",
        title: "TUR: AdGuard Turkish",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
    SourceSpec {
        url: "https://raw.githubusercontent.com/abpvn/abpvn/master/filter/abpvn_ublock.txt",
        title: "VIE: ABPVN List",
        group: FilterGroup::Regional,
        enabled_by_default: false,
    },
];
