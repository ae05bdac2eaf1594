//! Mount/unmount of the panel view, driven by host attach and visibility messages.
//!
//! The view exists only while the panel is both attached and visible. Becoming visible
//! again always mounts a fresh view, so mount hooks rerun; operator and draw state live in
//! the controller and survive the remount.

use super::panel::OperatorPanelController;
use super::view::PanelView;

pub type MountHook = Box<dyn FnMut(u64)>;

#[derive(Default)]
pub struct LifecycleCallbacks {
    pub on_mount: Option<MountHook>,
    pub on_unmount: Option<MountHook>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    generation: u64,
    renders: u64,
    view: PanelView,
}

impl MountedView {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Renders since this mount, including the initial one.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }
}

#[derive(Default)]
pub struct WidgetLifecycleManager {
    attached: bool,
    visible: bool,
    generation: u64,
    mounted: Option<MountedView>,
    callbacks: LifecycleCallbacks,
}

impl WidgetLifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callbacks(callbacks: LifecycleCallbacks) -> Self {
        Self {
            callbacks,
            ..Self::default()
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of mounts so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mounted(&self) -> Option<&MountedView> {
        self.mounted.as_ref()
    }

    /// Render output: `Some` iff attached and visible.
    pub fn render(&self, panel: &OperatorPanelController) -> Option<PanelView> {
        (self.attached && self.visible).then(|| panel.view())
    }

    pub fn on_after_attach(&mut self, panel: &OperatorPanelController) {
        self.attached = true;
        self.reconcile(panel, false);
    }

    pub fn on_before_detach(&mut self, panel: &OperatorPanelController) {
        self.attached = false;
        self.reconcile(panel, false);
    }

    pub fn on_show(&mut self, panel: &OperatorPanelController) {
        let was_hidden = !self.visible;
        self.visible = true;
        self.reconcile(panel, was_hidden);
    }

    pub fn on_hide(&mut self, panel: &OperatorPanelController) {
        self.visible = false;
        self.reconcile(panel, false);
    }

    /// Re-renders the mounted view in place.
    pub fn update(&mut self, panel: &OperatorPanelController) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.view = panel.view();
            mounted.renders += 1;
        }
    }

    fn reconcile(&mut self, panel: &OperatorPanelController, force_remount: bool) {
        let Some(view) = self.render(panel) else {
            self.unmount();
            return;
        };

        if force_remount {
            self.unmount();
        }

        match self.mounted.as_mut() {
            Some(mounted) => {
                mounted.view = view;
                mounted.renders += 1;
            }
            None => self.mount(view),
        }
    }

    fn mount(&mut self, view: PanelView) {
        self.generation += 1;
        self.mounted = Some(MountedView {
            generation: self.generation,
            renders: 1,
            view,
        });
        tracing::debug!(generation = self.generation, "panel view mounted");
        if let Some(hook) = self.callbacks.on_mount.as_mut() {
            hook(self.generation);
        }
    }

    fn unmount(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        tracing::debug!(generation = mounted.generation, "panel view unmounted");
        if let Some(hook) = self.callbacks.on_unmount.as_mut() {
            hook(mounted.generation);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/lifecycle.rs"]
mod tests;
