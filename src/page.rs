use crate::render::{self, Regions};
use crate::types::User;
use crate::view::Surface;

/// A standalone HTML document holding the three page regions.
pub struct Page {
    document: String,
}

impl Page {
    pub fn new() -> Self {
        let mut page = Self {
            document: String::new(),
        };
        page.show_loading();
        page
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Page {
    fn show_loading(&mut self) {
        self.document = render::document(&Regions {
            loading_visible: true,
            error_message: None,
            list_html: "",
        });
    }

    fn show_error(&mut self, message: &str) {
        self.document = render::document(&Regions {
            loading_visible: false,
            error_message: Some(message),
            list_html: "",
        });
    }

    fn show_users(&mut self, users: &[User]) {
        let mut list = String::new();
        render::render(users, &mut list);
        self.document = render::document(&Regions {
            loading_visible: false,
            error_message: None,
            list_html: &list,
        });
    }
}
