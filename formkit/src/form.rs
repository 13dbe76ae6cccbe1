//! Shared behaviour of items placed in a form.

use cellterm::{Color, Key};

use crate::primitive::Primitive;

/// Handler told which key ended editing of a form item: `Tab` (next item),
/// `BackTab` (previous item) or `Escape` (leave the form).
pub type FinishedFn = Box<dyn FnMut(Key)>;

/// A primitive that a form can lay out, style and chain with its siblings.
pub trait FormItem: Primitive {
    /// The label shown in front of the item's field.
    fn label(&self) -> String;

    /// Apply the styling a form shares across all of its items.
    fn set_form_attributes(
        &self,
        label: &str,
        label_color: Color,
        background: Color,
        field_text_color: Color,
        field_background_color: Color,
    ) -> &dyn FormItem;

    /// Install the handler called when the user is done with this item.
    /// Replaces any previous handler.
    fn set_finished_func(&self, handler: FinishedFn) -> &dyn FormItem;
}
