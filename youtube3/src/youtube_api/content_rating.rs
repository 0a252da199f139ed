//! Content ratings a video received under national rating schemes.

use serde::{Deserialize, Serialize};

/// Ratings schemes. The country-specific ratings are mostly for movies and shows.
///
/// Values are the scheme-specific literals documented by the API, for example
/// `mpaaPg13` or `bbfc15`; they are kept as strings since the set changes as
/// schemes are revised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agcom_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anatel_rating: Option<String>,
    /// The video's British Board of Film Classification (BBFC) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbfc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfvc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmukk_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catv_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catvfr_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cbfc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cce_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chfilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chvrs_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cicf_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cna_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csa_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cscf_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub czfilm_rating: Option<String>,
    /// The video's Departamento de Justiça, Classificação, Qualificação e Títulos (DJCQT - Brazil) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub djctq_rating: Option<String>,
    /// Reasons that explain why the video received its DJCTQ rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub djctq_rating_reasons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecbmct_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eefilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egfilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eirin_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcbm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fco_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fmoc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpb_rating: Option<String>,
    /// Reasons that explain why the video received its FPB rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpb_rating_reasons: Option<Vec<String>>,
    /// The video's Freiwillige Selbstkontrolle der Filmwirtschaft (FSK - Germany) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsk_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grfilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icaa_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifco_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ilfilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incaa_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kfcb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kijkwijzer_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kmrb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsf_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mccaa_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mccyp_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcst_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mda_rating: Option<String>,
    /// The video's Norwegian Medietilsynet rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medietilsynet_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meku_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mibac_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moctw_rating: Option<String>,
    /// The video's Motion Picture Association of America (MPAA) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpaa_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtrcb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbcpl_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfrc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfvcb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nkclv_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oflc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pefilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcnof_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resorteviolencia_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rte_rating: Option<String>,
    /// The video's National Film Registry of the Russian Federation (MKRF - Russia) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub russia_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skfilm_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smais_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smsa_rating: Option<String>,
    /// The video's TV Parental Guidelines (TVPG) rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvpg_rating: Option<String>,
    /// A rating that YouTube uses to identify age-restricted content; `ytAgeRestricted` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yt_rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_names() {
        let rating: ContentRating = serde_json::from_str(
            r#"{"mpaaRating":"mpaaPg13","catvfrRating":"catvfr13plus","djctqRatingReasons":["djctqViolence"],"ytRating":"ytAgeRestricted"}"#,
        )
        .unwrap();
        assert_eq!(rating.mpaa_rating.as_deref(), Some("mpaaPg13"));
        assert_eq!(rating.catvfr_rating.as_deref(), Some("catvfr13plus"));
        assert_eq!(
            rating.djctq_rating_reasons,
            Some(vec!["djctqViolence".to_string()])
        );
        assert_eq!(rating.yt_rating.as_deref(), Some("ytAgeRestricted"));
        assert_eq!(rating.bbfc_rating, None);
    }
}
