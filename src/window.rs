use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct WindowHandle {
    window: Window,
    width: usize,
    height: usize,
}

impl WindowHandle {
    pub fn open(title: &str, width: usize, height: usize) -> anyhow::Result<Self> {
        let opts = WindowOptions {
            resize: true,
            scale: minifb::Scale::X2,
            scale_mode: minifb::ScaleMode::AspectRatioStretch,
            ..Default::default()
        };

        let window = Window::new(title, width, height, opts)?;

        Ok(WindowHandle {
            window,
            width,
            height,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn keys_pressed(&self) -> Vec<Key> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .unwrap_or_default()
    }

    /// Pointer position in buffer coordinates, `None` outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    pub fn present(&mut self, buffer: &[u32]) -> anyhow::Result<()> {
        self.window
            .update_with_buffer(buffer, self.width, self.height)?;

        Ok(())
    }
}
