use super::request_state::BodyTab;

/// Top-level area of the screen that receives command keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Url,
    Body,
    Response,
    Environment,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Url => "URL",
            Section::Body => "BODY",
            Section::Response => "RESPONSE",
            Section::Environment => "ENVIRONMENT",
        }
    }

    /// Section bound to a number key (`1`..`4`).
    pub fn from_digit(c: char) -> Option<Section> {
        match c {
            '1' => Some(Section::Url),
            '2' => Some(Section::Body),
            '3' => Some(Section::Response),
            '4' => Some(Section::Environment),
            _ => None,
        }
    }

    /// Whether edit mode has a visible text field to focus: the URL, or the
    /// body editor while the Body tab is showing.
    pub fn is_editable(&self, body_tab: BodyTab) -> bool {
        match self {
            Section::Url => true,
            Section::Body => body_tab == BodyTab::Body,
            Section::Response | Section::Environment => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_sections() {
        assert_eq!(Section::from_digit('1'), Some(Section::Url));
        assert_eq!(Section::from_digit('2'), Some(Section::Body));
        assert_eq!(Section::from_digit('3'), Some(Section::Response));
        assert_eq!(Section::from_digit('4'), Some(Section::Environment));
        assert_eq!(Section::from_digit('5'), None);
    }

    #[test]
    fn test_only_url_and_body_tab_are_editable() {
        for tab in BodyTab::ALL {
            assert!(Section::Url.is_editable(tab));
            assert!(!Section::Response.is_editable(tab));
            assert!(!Section::Environment.is_editable(tab));
        }
        assert!(Section::Body.is_editable(BodyTab::Body));
        assert!(!Section::Body.is_editable(BodyTab::Headers));
    }
}
