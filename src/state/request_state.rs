use super::text_field::TextField;

pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Direction for the cyclic selectors (method, body tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] =
        [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Post,
            HttpMethod::Post => HttpMethod::Put,
            HttpMethod::Put => HttpMethod::Delete,
            HttpMethod::Delete => HttpMethod::Get,
        }
    }

    pub fn prev(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Delete,
            HttpMethod::Post => HttpMethod::Get,
            HttpMethod::Put => HttpMethod::Post,
            HttpMethod::Delete => HttpMethod::Put,
        }
    }

    pub fn cycle(&self, direction: Direction) -> HttpMethod {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }
}

/// Which editor occupies the lower-left pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyTab {
    #[default]
    Body,
    Headers,
}

impl BodyTab {
    pub const ALL: [BodyTab; 2] = [BodyTab::Body, BodyTab::Headers];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyTab::Body => "Body",
            BodyTab::Headers => "Headers",
        }
    }

    pub fn next(&self) -> BodyTab {
        match self {
            BodyTab::Body => BodyTab::Headers,
            BodyTab::Headers => BodyTab::Body,
        }
    }

    pub fn prev(&self) -> BodyTab {
        match self {
            BodyTab::Body => BodyTab::Headers,
            BodyTab::Headers => BodyTab::Body,
        }
    }

    pub fn cycle(&self, direction: Direction) -> BodyTab {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// The request being composed.
#[derive(Debug, Clone)]
pub struct RequestState {
    pub method: HttpMethod,
    pub url: TextField,
    pub body: TextField,
    pub body_tab: BodyTab,
    pub headers: Vec<KeyValuePair>,
}

impl Default for RequestState {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            url: TextField::single_line(DEFAULT_URL),
            body: TextField::multi_line("Body"),
            body_tab: BodyTab::default(),
            headers: vec![
                KeyValuePair::new("Content-Type", "application/json"),
                KeyValuePair::new("Authorization", "apikey test thing!"),
            ],
        }
    }
}

impl RequestState {
    pub fn cycle_method(&mut self, direction: Direction) {
        self.method = self.method.cycle(direction);
    }

    pub fn cycle_body_tab(&mut self, direction: Direction) {
        self.body_tab = self.body_tab.cycle(direction);
    }

    pub fn set_url(&mut self, text: impl Into<String>) {
        self.url.set_value(text);
    }

    pub fn set_body(&mut self, text: impl Into<String>) {
        self.body.set_value(text);
    }

    pub fn headers(&self) -> &[KeyValuePair] {
        &self.headers
    }
}
