#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    Submit,
    Cancel,
}

impl ButtonType {
    fn color(&self) -> (&'static str, &'static str) {
        match self {
            // keep full color list including bg- and hover:bg- classes
            // else tailwind will not add them to css
            ButtonType::Submit => ("bg-blue-600", "hover:bg-blue-700"),
            ButtonType::Cancel => ("bg-red-600", "hover:bg-red-700"),
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            ButtonType::Submit => "Submit",
            ButtonType::Cancel => "Cancel",
        }
    }

    pub fn button_class(&self, is_disabled: bool) -> String {
        let (color_normal, color_hover) = self.color();
        if is_disabled {
            "inline-block px-3 bg-gray-300 text-white font-bold py-2 rounded \
             cursor-not-allowed"
                .to_string()
        } else {
            format!(
                "inline-block px-3 {} {} text-white font-bold py-2 rounded",
                color_normal, color_hover
            )
        }
    }
}
