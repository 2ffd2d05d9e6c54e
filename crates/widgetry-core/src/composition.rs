//! Composition: asks each widget for its contribution and merges the results.

use crate::context::{ContextBuilder, Contribution, RenderContext, SharedContext};
use crate::widgets::Widget;

/// Run `prepare` on every widget in order.
///
/// Each non-empty contribution is merged into `shared` (later widgets overwrite
/// earlier keys) and kept; `builder` then turns the kept contributions, in
/// widget order, into the final render context. Widgets that opt out leave
/// `shared` untouched and are absent from the builder's input.
pub fn prepare_widgets<W, B>(
    widgets: &[W],
    shared: &mut SharedContext,
    top: &RenderContext,
    builder: &B,
) -> B::Output
where
    W: AsRef<dyn Widget>,
    B: ContextBuilder,
{
    let mut contributions: Vec<Contribution> = Vec::with_capacity(widgets.len());

    for widget in widgets {
        let widget = widget.as_ref();
        match widget.prepare(shared, top) {
            Some(contribution) if !contribution.is_empty() => {
                shared.merge(&contribution);
                contributions.push(contribution);
            }
            _ => tracing::debug!(name = widget.name(), "Widget contributed nothing"),
        }
    }

    builder.build(contributions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LayeredContextBuilder;
    use crate::widgets::WidgetKind;
    use serde_json::json;
    use std::path::Path;

    #[derive(Debug)]
    struct Fixed {
        name: &'static str,
        entries: Vec<(&'static str, &'static str)>,
        opt_out_on: Option<&'static str>,
    }

    impl Widget for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn dir(&self) -> &Path {
            Path::new("widgets")
        }

        fn kind(&self) -> WidgetKind {
            WidgetKind::Custom
        }

        fn contribution_key(&self) -> &str {
            self.name
        }

        fn prepare(&self, shared: &SharedContext, _top: &RenderContext) -> Option<Contribution> {
            if let Some(flag) = self.opt_out_on {
                if shared.flag(flag) == Some(false) {
                    return None;
                }
            }
            Some(self.entries.iter().copied().collect())
        }
    }

    fn fixed(name: &'static str, entries: Vec<(&'static str, &'static str)>) -> Box<dyn Widget> {
        Box::new(Fixed {
            name,
            entries,
            opt_out_on: None,
        })
    }

    #[test]
    fn test_last_writer_wins() {
        let widgets = vec![
            fixed("a", vec![("footer", "from-a"), ("only_a", "1")]),
            fixed("b", vec![("footer", "from-b")]),
        ];

        let mut shared = SharedContext::new();
        let context = prepare_widgets(
            &widgets,
            &mut shared,
            &RenderContext::default(),
            &LayeredContextBuilder,
        );

        assert_eq!(shared.get("footer"), Some(&json!("from-b")));
        assert_eq!(shared.get("only_a"), Some(&json!("1")));
        assert_eq!(context.layers().len(), 2);
        assert_eq!(context.lookup("footer"), Some(&json!("from-b")));
    }

    #[test]
    fn test_opt_out_leaves_shared_untouched() {
        let widgets: Vec<Box<dyn Widget>> = vec![
            Box::new(Fixed {
                name: "ga",
                entries: vec![("widgets/ga", "<script/>")],
                opt_out_on: Some("analytics"),
            }),
            fixed("box", vec![("box", "BOX")]),
        ];

        let mut shared = SharedContext::new();
        shared.insert("analytics", false);
        let before = shared.clone();

        let context = prepare_widgets(
            &widgets,
            &mut shared,
            &RenderContext::default(),
            &LayeredContextBuilder,
        );

        assert_eq!(context.layers().len(), 1);
        assert_eq!(context.lookup("widgets/ga"), None);
        assert_eq!(shared.get("widgets/ga"), before.get("widgets/ga"));
        assert_eq!(shared.get("box"), Some(&json!("BOX")));
    }

    #[test]
    fn test_empty_contribution_is_skipped() {
        let widgets = vec![fixed("empty", vec![])];
        let mut shared = SharedContext::new();
        let context = prepare_widgets(
            &widgets,
            &mut shared,
            &RenderContext::default(),
            &LayeredContextBuilder,
        );
        assert!(context.layers().is_empty());
        assert!(shared.as_map().is_empty());
    }
}
