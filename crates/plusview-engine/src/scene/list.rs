use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// commands to a scissor rect; nested clips intersect with their parent.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a command; it inherits the current clip rect.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Begins a scissor region. Must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap: zero-area clip so renderers skip the commands.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items sorted back-to-front.
    pub fn in_paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.key);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::RectCmd;

    fn rect_cmd(x: f32) -> DrawCmd {
        DrawCmd::Rect(RectCmd { rect: Rect::new(x, 0.0, 1.0, 1.0), color: Color::black() })
    }

    #[test]
    fn paint_order_respects_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(1), rect_cmd(0.0));
        list.push(ZIndex::new(0), rect_cmd(1.0));
        list.push(ZIndex::new(1), rect_cmd(2.0));

        let xs: Vec<f32> = list
            .in_paint_order()
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                DrawCmd::Image(_) => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(5.0, 5.0, 10.0, 10.0));
        list.push(ZIndex::default(), rect_cmd(0.0));
        list.pop_clip();
        list.push(ZIndex::default(), rect_cmd(0.0));
        list.pop_clip();
        list.push(ZIndex::default(), rect_cmd(0.0));

        let clips: Vec<Option<Rect>> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(
            clips,
            vec![Some(Rect::new(5.0, 5.0, 5.0, 5.0)), Some(Rect::new(0.0, 0.0, 10.0, 10.0)), None]
        );
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0));
        list.push(ZIndex::default(), rect_cmd(0.0));
        list.clear();
        assert!(list.is_empty());
        list.push(ZIndex::default(), rect_cmd(0.0));
        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
