use std::cell::RefCell;
use std::rc::Rc;

/// The text editor the user types into.
pub trait Editor {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
}

/// In-memory editor buffer. Clones share the text.
#[derive(Debug, Clone, Default)]
pub struct BufferEditor {
    text: Rc<RefCell<String>>,
}

impl BufferEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Rc::new(RefCell::new(text.into())),
        }
    }
}

impl Editor for BufferEditor {
    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_value(&mut self, text: &str) {
        let mut buf = self.text.borrow_mut();
        buf.clear();
        buf.push_str(text);
    }
}
