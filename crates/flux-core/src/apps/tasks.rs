//! TaskFlow -- the task list screen.
//!
//! Toggle flips a task's completed flag in place; add appends a task with
//! fixed default text and Medium priority. No deletion, no validation.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::apps::{draw_chrome, hide_chrome, hit_close};
use crate::theme;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Accent color for the priority edge stripe.
    pub fn color(self) -> Color {
        match self {
            Self::Low => Color::rgb(34, 197, 94),
            Self::Medium => Color::rgb(234, 179, 8),
            Self::High => Color::rgb(239, 68, 68),
        }
    }
}

/// One task.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

/// Action produced by a tap on the task screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksAction {
    Toggle(String),
    Add,
    Close,
}

/// How many task rows the screen lays out.
const MAX_ROWS: usize = 6;

/// Runtime state for the task list.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: vec![
                Task {
                    id: "1".to_string(),
                    text: "Design FluxOS interface".to_string(),
                    completed: true,
                    priority: Priority::High,
                },
                Task {
                    id: "2".to_string(),
                    text: "Implement gesture controls".to_string(),
                    completed: false,
                    priority: Priority::Medium,
                },
                Task {
                    id: "3".to_string(),
                    text: "Test FluxConnect sync".to_string(),
                    completed: false,
                    priority: Priority::Low,
                },
            ],
            next_id: 4,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Flip the completed flag of the matching task. Unknown ids are a
    /// silent no-op; returns whether anything changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            },
            None => false,
        }
    }

    /// Append a new task with default text and Medium priority.
    pub fn add_task(&mut self) -> &Task {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: "New task".to_string(),
            completed: false,
            priority: Priority::Medium,
        });
        log::debug!("task added ({} total)", self.tasks.len());
        self.tasks.last().expect("pushed just above")
    }

    fn row_rect(i: usize) -> (i32, i32, u32, u32) {
        let y = theme::CONTENT_Y + i as i32 * (theme::ROW_H as i32 + theme::ROW_GAP);
        (theme::CONTENT_X, y, theme::CONTENT_W, theme::ROW_H)
    }

    /// Rect of the add button (below the last visible row).
    fn add_rect(&self) -> (i32, i32, u32, u32) {
        let rows = self.tasks.len().min(MAX_ROWS);
        let y = theme::CONTENT_Y + rows as i32 * (theme::ROW_H as i32 + theme::ROW_GAP);
        (theme::CONTENT_X, y, theme::CONTENT_W, 44)
    }

    /// Hit-test a tap on the task screen.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<TasksAction> {
        if hit_close(x, y) {
            return Some(TasksAction::Close);
        }
        for (i, task) in self.tasks.iter().take(MAX_ROWS).enumerate() {
            let (rx, ry, _, rh) = Self::row_rect(i);
            // The checkbox zone spans the left edge of the row.
            if x >= rx && x < rx + 48 && y >= ry && y < ry + rh as i32 {
                return Some(TasksAction::Toggle(task.id.clone()));
            }
        }
        let (ax, ay, aw, ah) = self.add_rect();
        if x >= ax && x < ax + aw as i32 && y >= ay && y < ay + ah as i32 {
            return Some(TasksAction::Add);
        }
        None
    }

    /// Synchronize SDI objects for the task screen.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry) {
        draw_chrome(sdi, "tasks", "TaskFlow");

        for i in 0..MAX_ROWS {
            let row_name = format!("task_row_{i}");
            let stripe_name = format!("task_stripe_{i}");
            let check_name = format!("task_check_{i}");
            let text_name = format!("task_text_{i}");
            let badge_name = format!("task_badge_{i}");

            match self.tasks.get(i) {
                Some(task) => {
                    let (x, y, w, h) = Self::row_rect(i);
                    ensure_rounded_fill(sdi, &row_name, x, y, w, h, theme::CARD_BG, 10);
                    // Priority edge stripe.
                    ensure_rounded_fill(
                        sdi,
                        &stripe_name,
                        x,
                        y,
                        4,
                        h,
                        task.priority.color(),
                        2,
                    );
                    // Checkbox.
                    ensure_rounded_fill(
                        sdi,
                        &check_name,
                        x + 16,
                        y + (h as i32 - 20) / 2,
                        20,
                        20,
                        if task.completed {
                            theme::ACCENT
                        } else {
                            Color::TRANSPARENT
                        },
                        4,
                    );
                    if let Ok(obj) = sdi.get_mut(&check_name) {
                        obj.stroke_width = Some(2);
                        obj.stroke_color = Some(if task.completed {
                            theme::ACCENT
                        } else {
                            theme::TEXT_MUTED
                        });
                    }
                    ensure_text(
                        sdi,
                        &text_name,
                        x + 48,
                        y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                        theme::FONT_SMALL,
                        if task.completed {
                            theme::TEXT_MUTED
                        } else {
                            theme::TEXT_PRIMARY
                        },
                    );
                    if let Ok(obj) = sdi.get_mut(&text_name) {
                        obj.text = Some(task.text.clone());
                    }
                    // Priority badge, right-aligned.
                    let label = task.priority.label();
                    let tw = theme::text_w(label, theme::FONT_SMALL);
                    ensure_text(
                        sdi,
                        &badge_name,
                        x + w as i32 - tw - 12,
                        y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                        theme::FONT_SMALL,
                        task.priority.color(),
                    );
                    if let Ok(obj) = sdi.get_mut(&badge_name) {
                        obj.text = Some(label.to_string());
                    }
                },
                None => {
                    hide_objects(
                        sdi,
                        &[&row_name, &stripe_name, &check_name, &text_name, &badge_name],
                    );
                },
            }
        }

        // Add button.
        let (x, y, w, h) = self.add_rect();
        ensure_rounded_fill(sdi, "task_add", x, y, w, h, theme::ACCENT.with_alpha(50), 10);
        if let Ok(obj) = sdi.get_mut("task_add") {
            obj.stroke_width = Some(1);
            obj.stroke_color = Some(theme::ACCENT);
        }
        let label = "+ New Task";
        let tw = theme::text_w(label, theme::FONT_SMALL);
        ensure_text(
            sdi,
            "task_add_label",
            x + (w as i32 - tw) / 2,
            y + (h as i32 - theme::FONT_SMALL as i32) / 2,
            theme::FONT_SMALL,
            theme::TEXT_PRIMARY,
        );
        if let Ok(obj) = sdi.get_mut("task_add_label") {
            obj.text = Some(label.to_string());
        }
    }

    /// Hide all task screen SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_chrome(sdi, "tasks");
        for i in 0..MAX_ROWS {
            hide_objects(
                sdi,
                &[
                    &format!("task_row_{i}"),
                    &format!("task_stripe_{i}"),
                    &format!("task_check_{i}"),
                    &format!("task_text_{i}"),
                    &format!("task_badge_{i}"),
                ],
            );
        }
        hide_objects(sdi, &["task_add", "task_add_label"]);
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}
