//! Modal drawing tools
//!
//! Each tool is a small state machine fed with [`InputEvent`]s by its host (the GUI
//! viewport or the test harness). Anchors come from the [`PointPicker`], so they snap
//! to nearby mesh vertices.
//!
//! The preview object of a gesture is replaced wholesale on every pointer sample and
//! the whole gesture is recorded as a single undo step when it finishes. Cancelling
//! removes the preview and records nothing.

use glam::Vec3;
use shared::{ObjectId, ShapeSpec, ToolId};

use super::scene::{CurveData, SceneState, Transform};
use super::settings::{AppSettings, ToolSettings};
use crate::input::{InputEvent, ModalResult, PointerButton};
use crate::viewport::camera::ViewCamera;
use crate::viewport::picking::{PickedPoint, PointPicker};

/// What a tool may touch while handling an event
pub struct ToolContext<'a> {
    pub scene: &'a mut SceneState,
    pub camera: &'a mut ViewCamera,
    pub settings: &'a AppSettings,
}

impl ToolContext<'_> {
    fn pick(&self, picker: &mut PointPicker, pos: glam::Vec2) -> PickedPoint {
        picker.pick(
            pos,
            self.scene.snap_targets(),
            &*self.camera,
            &self.settings.snap,
        )
    }
}

/// Phase of a press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Dragging,
    Finished,
    Cancelled,
}

/// Press-drag-release drawing of one shape
#[derive(Debug, Clone)]
pub struct ShapeTool {
    spec: ShapeSpec,
    phase: DrawPhase,
    start: Option<Vec3>,
    end: Option<Vec3>,
    preview: Option<ObjectId>,
    picker: PointPicker,
    hover: Option<PickedPoint>,
}

impl ShapeTool {
    pub fn new(spec: ShapeSpec) -> Self {
        Self {
            spec,
            phase: DrawPhase::Idle,
            start: None,
            end: None,
            preview: None,
            picker: PointPicker::new(),
            hover: None,
        }
    }

    pub fn spec(&self) -> ShapeSpec {
        self.spec
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Live preview object, if any
    pub fn preview(&self) -> Option<&ObjectId> {
        self.preview.as_ref()
    }

    pub fn anchors(&self) -> (Option<Vec3>, Option<Vec3>) {
        (self.start, self.end)
    }

    pub fn invoke(&mut self, ctx: &mut ToolContext) -> ModalResult {
        ctx.camera.set_top_view();
        ModalResult::RunningModal
    }

    pub fn handle(&mut self, ctx: &mut ToolContext, event: &InputEvent) -> ModalResult {
        match self.phase {
            DrawPhase::Finished => return ModalResult::Finished,
            DrawPhase::Cancelled => return ModalResult::Cancelled,
            DrawPhase::Idle | DrawPhase::Dragging => {}
        }

        if event.is_cancel() {
            self.cancel(ctx);
            return ModalResult::Cancelled;
        }

        match *event {
            InputEvent::PointerMoved { pos } => {
                let picked = ctx.pick(&mut self.picker, pos);
                self.hover = Some(picked);
                if self.phase == DrawPhase::Dragging {
                    self.end = Some(picked.point);
                    self.rebuild_preview(ctx);
                }
            }
            InputEvent::ButtonPressed {
                button: PointerButton::Primary,
                pos,
            } if self.phase == DrawPhase::Idle => {
                let picked = ctx.pick(&mut self.picker, pos);
                self.hover = Some(picked);
                self.start = Some(picked.point);
                ctx.scene.begin_gesture();
                self.phase = DrawPhase::Dragging;
                tracing::debug!("{} started at {:?}", self.spec.object_name(), picked.point);
            }
            InputEvent::ButtonReleased {
                button: PointerButton::Primary,
                ..
            } if self.phase == DrawPhase::Dragging => {
                self.finish(ctx);
                return ModalResult::Finished;
            }
            _ => {}
        }
        ModalResult::RunningModal
    }

    /// Abort the gesture from outside (tool switch, window close)
    pub fn cancel(&mut self, ctx: &mut ToolContext) {
        if let Some(id) = self.preview.take() {
            ctx.scene.remove_object(&id);
        }
        ctx.scene.abort_gesture();
        self.start = None;
        self.end = None;
        self.phase = DrawPhase::Cancelled;
        tracing::debug!("{} cancelled", self.spec.object_name());
    }

    pub fn hover(&self) -> Option<PickedPoint> {
        self.hover
    }

    fn rebuild_preview(&mut self, ctx: &mut ToolContext) {
        let (Some(a), Some(b)) = (self.start, self.end) else {
            return;
        };
        if let Some(old) = self.preview.take() {
            ctx.scene.remove_object(&old);
        }
        self.preview = Some(ctx.scene.add_shape(self.spec, a, b));
    }

    fn finish(&mut self, ctx: &mut ToolContext) {
        ctx.scene.commit_gesture();
        self.phase = DrawPhase::Finished;
        match self.preview.as_ref().and_then(|id| ctx.scene.get_object(id)) {
            Some(obj) => tracing::info!("Created {}", obj.name),
            None => tracing::debug!("{} released without geometry", self.spec.object_name()),
        }
    }
}

/// Phase of the two-click dimension gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionPhase {
    AwaitingFirst,
    AwaitingSecond,
    Finished,
    Cancelled,
}

/// Two-click linear dimension: first click sets the start, second click finalizes
#[derive(Debug, Clone)]
pub struct DimensionTool {
    phase: DimensionPhase,
    start: Option<Vec3>,
    end: Option<Vec3>,
    /// Temporary line shown between the clicks
    temp: Option<ObjectId>,
    picker: PointPicker,
    hover: Option<PickedPoint>,
}

impl Default for DimensionTool {
    fn default() -> Self {
        Self {
            phase: DimensionPhase::AwaitingFirst,
            start: None,
            end: None,
            temp: None,
            picker: PointPicker::new(),
            hover: None,
        }
    }
}

impl DimensionTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DimensionPhase {
        self.phase
    }

    pub fn temp_line(&self) -> Option<&ObjectId> {
        self.temp.as_ref()
    }

    pub fn invoke(&mut self, ctx: &mut ToolContext) -> ModalResult {
        ctx.camera.set_top_view();
        ModalResult::RunningModal
    }

    pub fn handle(&mut self, ctx: &mut ToolContext, event: &InputEvent) -> ModalResult {
        match self.phase {
            DimensionPhase::Finished => return ModalResult::Finished,
            DimensionPhase::Cancelled => return ModalResult::Cancelled,
            DimensionPhase::AwaitingFirst | DimensionPhase::AwaitingSecond => {}
        }

        if event.is_cancel() {
            self.cancel(ctx);
            return ModalResult::Cancelled;
        }

        match *event {
            InputEvent::PointerMoved { pos } => {
                let picked = ctx.pick(&mut self.picker, pos);
                self.hover = Some(picked);
                if self.phase == DimensionPhase::AwaitingSecond {
                    self.end = Some(picked.point);
                    self.rebuild_temp(ctx);
                }
            }
            InputEvent::ButtonPressed {
                button: PointerButton::Primary,
                pos,
            } => {
                let picked = ctx.pick(&mut self.picker, pos);
                self.hover = Some(picked);
                match self.phase {
                    DimensionPhase::AwaitingFirst => {
                        self.start = Some(picked.point);
                        ctx.scene.begin_gesture();
                        self.phase = DimensionPhase::AwaitingSecond;
                    }
                    _ => {
                        self.end = Some(picked.point);
                        self.finish(ctx);
                        return ModalResult::Finished;
                    }
                }
            }
            _ => {}
        }
        ModalResult::RunningModal
    }

    pub fn cancel(&mut self, ctx: &mut ToolContext) {
        if let Some(id) = self.temp.take() {
            ctx.scene.remove_object(&id);
        }
        ctx.scene.abort_gesture();
        self.start = None;
        self.end = None;
        self.phase = DimensionPhase::Cancelled;
        tracing::debug!("Dimension cancelled");
    }

    pub fn hover(&self) -> Option<PickedPoint> {
        self.hover
    }

    fn rebuild_temp(&mut self, ctx: &mut ToolContext) {
        let (Some(a), Some(b)) = (self.start, self.end) else {
            return;
        };
        if let Some(old) = self.temp.take() {
            ctx.scene.remove_object(&old);
        }
        self.temp = Some(ctx.scene.create_curve(
            "TempDimension",
            CurveData::poly(vec![a, b], false),
            Transform::default(),
        ));
    }

    fn finish(&mut self, ctx: &mut ToolContext) {
        if let Some(id) = self.temp.take() {
            ctx.scene.remove_object(&id);
        }
        if let (Some(a), Some(b)) = (self.start, self.end) {
            ctx.scene.add_dimension(a, b, &ctx.settings.dimension);
        }
        ctx.scene.commit_gesture();
        self.phase = DimensionPhase::Finished;
    }
}

/// The modal tool currently receiving viewport input
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Shape(ShapeTool),
    Dimension(DimensionTool),
}

impl ActiveTool {
    /// Modal tool for `tool`, or None for tools that run immediately
    pub fn for_tool(tool: ToolId, settings: &ToolSettings) -> Option<Self> {
        let spec = match tool {
            ToolId::DrawLine => ShapeSpec::Line,
            ToolId::DrawRectangle => ShapeSpec::Rectangle,
            ToolId::DrawCircle => ShapeSpec::Circle,
            ToolId::DrawPolygon => ShapeSpec::Polygon {
                sides: settings.polygon_sides,
            },
            ToolId::CreateDimension => return Some(ActiveTool::Dimension(DimensionTool::new())),
            ToolId::AddLayer | ToolId::RemoveLayer | ToolId::Extrude => return None,
        };
        Some(ActiveTool::Shape(ShapeTool::new(spec)))
    }

    pub fn tool_id(&self) -> ToolId {
        match self {
            ActiveTool::Shape(t) => t.spec().tool(),
            ActiveTool::Dimension(_) => ToolId::CreateDimension,
        }
    }

    pub fn invoke(&mut self, ctx: &mut ToolContext) -> ModalResult {
        match self {
            ActiveTool::Shape(t) => t.invoke(ctx),
            ActiveTool::Dimension(t) => t.invoke(ctx),
        }
    }

    pub fn handle(&mut self, ctx: &mut ToolContext, event: &InputEvent) -> ModalResult {
        match self {
            ActiveTool::Shape(t) => t.handle(ctx, event),
            ActiveTool::Dimension(t) => t.handle(ctx, event),
        }
    }

    pub fn cancel(&mut self, ctx: &mut ToolContext) {
        match self {
            ActiveTool::Shape(t) => t.cancel(ctx),
            ActiveTool::Dimension(t) => t.cancel(ctx),
        }
    }

    /// Last picked point under the cursor (snap marker)
    pub fn hover(&self) -> Option<PickedPoint> {
        match self {
            ActiveTool::Shape(t) => t.hover(),
            ActiveTool::Dimension(t) => t.hover(),
        }
    }

    /// Status bar hint for the current phase
    pub fn hint(&self) -> String {
        match self {
            ActiveTool::Shape(t) => match t.phase() {
                DrawPhase::Idle => format!("{}: press and drag", t.spec().tool().label()),
                DrawPhase::Dragging => "Release to finish, right-click or Esc to cancel".into(),
                DrawPhase::Finished | DrawPhase::Cancelled => String::new(),
            },
            ActiveTool::Dimension(t) => match t.phase() {
                DimensionPhase::AwaitingFirst => "Create Dimension: click the first point".into(),
                DimensionPhase::AwaitingSecond => {
                    "Click the second point, right-click or Esc to cancel".into()
                }
                DimensionPhase::Finished | DimensionPhase::Cancelled => String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use glam::Vec2;

    struct Fixture {
        scene: SceneState,
        camera: ViewCamera,
        settings: AppSettings,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                scene: SceneState::default(),
                camera: ViewCamera::new(Vec2::new(800.0, 600.0)),
                settings: AppSettings::default(),
            }
        }

        fn ctx(&mut self) -> ToolContext<'_> {
            ToolContext {
                scene: &mut self.scene,
                camera: &mut self.camera,
                settings: &self.settings,
            }
        }

        fn screen(&self, world: Vec3) -> Vec2 {
            self.camera.project(world).unwrap()
        }
    }

    fn moved(pos: Vec2) -> InputEvent {
        InputEvent::PointerMoved { pos }
    }

    fn press(pos: Vec2) -> InputEvent {
        InputEvent::ButtonPressed {
            button: PointerButton::Primary,
            pos,
        }
    }

    fn release(pos: Vec2) -> InputEvent {
        InputEvent::ButtonReleased {
            button: PointerButton::Primary,
            pos,
        }
    }

    #[test]
    fn test_invoke_sets_top_view() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        assert!(!f.camera.is_top_view());
        assert_eq!(tool.invoke(&mut f.ctx()), ModalResult::RunningModal);
        assert!(f.camera.is_top_view());
    }

    #[test]
    fn test_drag_creates_single_preview() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Rectangle);
        tool.invoke(&mut f.ctx());
        let a = f.screen(Vec3::ZERO);
        let b = f.screen(Vec3::new(2.0, 1.0, 0.0));
        let mid = f.screen(Vec3::new(1.0, 1.0, 0.0));

        tool.handle(&mut f.ctx(), &press(a));
        assert_eq!(tool.phase(), DrawPhase::Dragging);
        assert_eq!(f.scene.object_count(), 0);

        tool.handle(&mut f.ctx(), &moved(mid));
        tool.handle(&mut f.ctx(), &moved(b));
        assert_eq!(f.scene.object_count(), 1);
        let preview = tool.preview().unwrap().clone();
        assert_eq!(f.scene.get_object(&preview).unwrap().name, "Rectangle");

        let result = tool.handle(&mut f.ctx(), &release(b));
        assert_eq!(result, ModalResult::Finished);
        assert_eq!(f.scene.object_count(), 1);
        assert!(f.scene.get_object(&preview).is_some());
    }

    #[test]
    fn test_finished_gesture_is_one_undo_step() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        let a = f.screen(Vec3::ZERO);
        let b = f.screen(Vec3::new(3.0, 0.0, 0.0));
        tool.handle(&mut f.ctx(), &press(a));
        for i in 1..=5 {
            let p = f.screen(Vec3::new(i as f32 * 0.5, 0.0, 0.0));
            tool.handle(&mut f.ctx(), &moved(p));
        }
        tool.handle(&mut f.ctx(), &moved(b));
        tool.handle(&mut f.ctx(), &release(b));

        assert!(f.scene.can_undo());
        f.scene.undo();
        assert_eq!(f.scene.object_count(), 0);
        assert!(!f.scene.can_undo());
    }

    #[test]
    fn test_cancel_removes_preview() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Circle);
        tool.invoke(&mut f.ctx());
        tool.handle(&mut f.ctx(), &press(Vec2::new(400.0, 300.0)));
        tool.handle(&mut f.ctx(), &moved(Vec2::new(450.0, 300.0)));
        assert_eq!(f.scene.object_count(), 1);

        let result = tool.handle(&mut f.ctx(), &InputEvent::KeyPressed(Key::Escape));
        assert_eq!(result, ModalResult::Cancelled);
        assert_eq!(tool.phase(), DrawPhase::Cancelled);
        assert_eq!(f.scene.object_count(), 0);
        assert!(!f.scene.can_undo());
        assert_eq!(tool.anchors(), (None, None));
    }

    #[test]
    fn test_right_click_cancels() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        tool.handle(&mut f.ctx(), &press(Vec2::new(400.0, 300.0)));
        tool.handle(&mut f.ctx(), &moved(Vec2::new(420.0, 300.0)));
        let right = InputEvent::ButtonPressed {
            button: PointerButton::Secondary,
            pos: Vec2::new(420.0, 300.0),
        };
        assert_eq!(tool.handle(&mut f.ctx(), &right), ModalResult::Cancelled);
        assert_eq!(f.scene.object_count(), 0);
    }

    #[test]
    fn test_release_without_motion_creates_nothing() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        let p = Vec2::new(400.0, 300.0);
        tool.handle(&mut f.ctx(), &press(p));
        assert_eq!(tool.handle(&mut f.ctx(), &release(p)), ModalResult::Finished);
        assert_eq!(f.scene.object_count(), 0);
        assert!(!f.scene.can_undo());
    }

    #[test]
    fn test_release_while_idle_ignored() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(tool.handle(&mut f.ctx(), &release(p)), ModalResult::RunningModal);
        assert_eq!(tool.phase(), DrawPhase::Idle);
    }

    #[test]
    fn test_motion_while_idle_only_hovers() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        tool.handle(&mut f.ctx(), &moved(Vec2::new(400.0, 300.0)));
        assert_eq!(f.scene.object_count(), 0);
        let hover = tool.hover().unwrap();
        assert!(hover.point.length() < 1e-4);
        assert!(!hover.snapped);
    }

    #[test]
    fn test_terminal_phase_is_sticky() {
        let mut f = Fixture::new();
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        tool.handle(&mut f.ctx(), &InputEvent::KeyPressed(Key::Escape));
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(tool.handle(&mut f.ctx(), &press(p)), ModalResult::Cancelled);
        assert!(!f.scene.in_gesture());
    }

    #[test]
    fn test_anchor_snaps_to_mesh_vertex() {
        let mut f = Fixture::new();
        f.camera.set_top_view();
        f.scene.create_mesh(
            "Plane",
            crate::viewport::mesh::plane(2.0, [1.0; 3]),
            Transform::default(),
        );
        let mut tool = ShapeTool::new(ShapeSpec::Line);
        tool.invoke(&mut f.ctx());
        let corner = Vec3::new(1.0, 1.0, 0.0);
        let near_corner = f.screen(corner) + Vec2::new(6.0, 5.0);
        tool.handle(&mut f.ctx(), &press(near_corner));
        assert_eq!(tool.anchors().0, Some(corner));
    }

    #[test]
    fn test_polygon_uses_configured_sides() {
        let mut settings = ToolSettings::default();
        settings.polygon_sides = 9;
        let tool = ActiveTool::for_tool(ToolId::DrawPolygon, &settings).unwrap();
        let ActiveTool::Shape(shape) = tool else {
            panic!("expected a shape tool");
        };
        assert_eq!(shape.spec(), ShapeSpec::Polygon { sides: 9 });
    }

    #[test]
    fn test_non_modal_tools() {
        let settings = ToolSettings::default();
        assert!(ActiveTool::for_tool(ToolId::Extrude, &settings).is_none());
        assert!(ActiveTool::for_tool(ToolId::AddLayer, &settings).is_none());
        let dim = ActiveTool::for_tool(ToolId::CreateDimension, &settings).unwrap();
        assert_eq!(dim.tool_id(), ToolId::CreateDimension);
    }

    #[test]
    fn test_dimension_two_clicks() {
        let mut f = Fixture::new();
        let mut tool = DimensionTool::new();
        tool.invoke(&mut f.ctx());
        let a = f.screen(Vec3::ZERO);
        let b = f.screen(Vec3::new(3.0, 4.0, 0.0));

        tool.handle(&mut f.ctx(), &press(a));
        tool.handle(&mut f.ctx(), &release(a));
        assert_eq!(tool.phase(), DimensionPhase::AwaitingSecond);

        tool.handle(&mut f.ctx(), &moved(b));
        assert_eq!(f.scene.object_count(), 1);
        let temp = tool.temp_line().unwrap().clone();
        assert!(f.scene.get_object(&temp).unwrap().materials.is_empty());

        assert_eq!(tool.handle(&mut f.ctx(), &press(b)), ModalResult::Finished);
        assert!(f.scene.get_object(&temp).is_none());
        assert_eq!(f.scene.object_count(), 2);
        let label = f.scene.find_by_name("Dimension_Text").unwrap();
        assert_eq!(label.as_text().unwrap().body, "5.00");

        f.scene.undo();
        assert_eq!(f.scene.object_count(), 0);
    }

    #[test]
    fn test_dimension_cancel_after_first_click() {
        let mut f = Fixture::new();
        let mut tool = DimensionTool::new();
        tool.invoke(&mut f.ctx());
        tool.handle(&mut f.ctx(), &press(Vec2::new(400.0, 300.0)));
        tool.handle(&mut f.ctx(), &moved(Vec2::new(500.0, 300.0)));
        assert_eq!(f.scene.object_count(), 1);
        let right = InputEvent::ButtonPressed {
            button: PointerButton::Secondary,
            pos: Vec2::new(500.0, 300.0),
        };
        assert_eq!(tool.handle(&mut f.ctx(), &right), ModalResult::Cancelled);
        assert_eq!(f.scene.object_count(), 0);
        assert!(!f.scene.can_undo());
    }

    #[test]
    fn test_hint_follows_phase() {
        let mut f = Fixture::new();
        let mut tool = ActiveTool::for_tool(ToolId::DrawLine, &ToolSettings::default()).unwrap();
        tool.invoke(&mut f.ctx());
        assert!(tool.hint().starts_with("Draw Line"));
        tool.handle(&mut f.ctx(), &press(Vec2::new(400.0, 300.0)));
        assert!(tool.hint().starts_with("Release"));
    }
}
