use serde::{Deserialize, Serialize};
use crate::accessors;

/// One impression of a display ad shown in a browser tab.
///
/// A record is either prepared for insertion, in which case the storage has not assigned
/// `uuid` yet, or materialized from a stored row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAd {
    uuid: Option<String>,
    creative_instance_id: String,
    position: i32,
    tab_id: i32,
    ad_title: String,
    ad_description: Option<String>,
    ad_cta_text: String,
    ad_cta_link: String,
    ad_image: String,
}

impl DisplayAd {
    pub fn new_for_insert(creative_instance_id: impl Into<String>, position: i32, tab_id: i32,
                          ad_title: impl Into<String>, ad_cta_text: impl Into<String>,
                          ad_cta_link: impl Into<String>, ad_image: impl Into<String>) -> Self {
        Self {
            uuid: None,
            creative_instance_id: creative_instance_id.into(),
            position,
            tab_id,
            ad_title: ad_title.into(),
            ad_description: None,
            ad_cta_text: ad_cta_text.into(),
            ad_cta_link: ad_cta_link.into(),
            ad_image: ad_image.into(),
        }
    }

    /// Both `uuid` and `ad_description` are nullable in the table, so they stay optional here too.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(uuid: Option<String>, creative_instance_id: impl Into<String>, position: i32, tab_id: i32,
                       ad_title: impl Into<String>, ad_description: Option<String>, ad_cta_text: impl Into<String>,
                       ad_cta_link: impl Into<String>, ad_image: impl Into<String>) -> Self {
        Self {
            uuid,
            ad_description,
            ..Self::new_for_insert(creative_instance_id, position, tab_id, ad_title, ad_cta_text, ad_cta_link, ad_image)
        }
    }
}

accessors!(DisplayAd,
    optional_text uuid: set_uuid,
    text creative_instance_id: set_creative_instance_id,
    number position: set_position,
    number tab_id: set_tab_id,
    text ad_title: set_ad_title,
    optional_text ad_description: set_ad_description,
    text ad_cta_text: set_ad_cta_text,
    text ad_cta_link: set_ad_cta_link,
    text ad_image: set_ad_image,
);
