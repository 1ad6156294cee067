//! 토스트 알림 큐.
//!
//! 페이지당 하나 생성하여 호출자에게 주입하는 알림 서비스.
//! 표시 요청을 받아 표시면에 요소를 추가하고, 최대 표시 개수를 넘으면
//! 가장 오래된 항목부터 제거하며, 에러가 아닌 알림은 타이머로 퇴장시킨다.
//!
//! 상태 전이: `Created → Visible → Dismissing → Removed`
//!
//! - 에러 알림은 타이머로 사라지지 않는다. `dismiss`로만 닫힌다.
//! - 예약된 타이머는 취소하지 않는다. 이미 제거된 항목에 대한 처리는 no-op.

use parking_lot::Mutex;
use peerview_core::config::ToastConfig;
use peerview_core::models::notification::{
    Notification, NotificationId, NotificationPhase, Severity,
};
use peerview_core::ports::surface::ToastSurface;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, warn};

/// 큐 항목
#[derive(Debug)]
struct Entry {
    notification: Notification,
    phase: NotificationPhase,
}

/// 큐 상태 (표시 순서 = 삽입 순서)
#[derive(Debug, Default)]
struct QueueState {
    mounted: bool,
    entries: VecDeque<Entry>,
}

struct Inner {
    surface: Arc<dyn ToastSurface>,
    config: ToastConfig,
    state: Mutex<QueueState>,
}

/// 토스트 알림 서비스
///
/// 복제 비용이 낮은 핸들이며, 모든 복제본은 같은 큐를 공유한다.
#[derive(Clone)]
pub struct ToastService {
    inner: Arc<Inner>,
}

impl fmt::Debug for ToastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ToastService")
            .field("config", &self.inner.config)
            .field("mounted", &state.mounted)
            .field("entries", &state.entries.len())
            .finish()
    }
}

impl ToastService {
    /// 새 서비스 생성 (표시면은 `init` 또는 첫 `display`에서 준비)
    pub fn new(surface: Arc<dyn ToastSurface>, config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                config,
                state: Mutex::new(QueueState::default()),
            }),
        }
    }

    /// 표시면 준비. 여러 번 호출해도 안전하다.
    pub fn init(&self) {
        let mut state = self.inner.state.lock();
        self.mount_locked(&mut state);
    }

    /// 초기화 여부
    pub fn is_initialized(&self) -> bool {
        self.inner.state.lock().mounted
    }

    /// 기본 표시 시간으로 알림 표시
    pub fn display(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
    ) -> NotificationId {
        self.display_for(message, severity, self.inner.config.default_duration())
    }

    /// 표시 시간을 지정하여 알림 표시
    ///
    /// 추가 → 최대 개수 정리 → 진입 애니메이션 순서로 처리하므로
    /// 최대 개수는 항상 추가 이후에 측정된다.
    pub fn display_for(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        duration: Duration,
    ) -> NotificationId {
        let notification = Notification::new(message, severity, duration);
        let id = notification.id;
        let auto_dismiss = notification.severity.auto_dismisses();

        {
            let mut state = self.inner.state.lock();
            self.mount_locked(&mut state);

            self.inner.surface.append(&notification);
            debug!("토스트 추가: {id} ({})", notification.severity);
            state.entries.push_back(Entry {
                notification,
                phase: NotificationPhase::Created,
            });

            while state.entries.len() > self.inner.config.visible_cap() {
                if let Some(evicted) = state.entries.pop_front() {
                    self.inner.surface.remove(evicted.notification.id);
                    debug!("토스트 초과 제거: {}", evicted.notification.id);
                }
            }

            if let Some(entry) = state.entries.iter_mut().find(|e| e.notification.id == id) {
                entry.phase = NotificationPhase::Visible;
                self.inner.surface.set_visible(id, true);
            }
        }

        if auto_dismiss {
            self.schedule_exit(id, Some(duration));
        }

        id
    }

    /// 성공 알림
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.display(message, Severity::Success)
    }

    /// 에러 알림 (수동으로 닫을 때까지 유지)
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.display(message, Severity::Error)
    }

    /// 정보 알림
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.display(message, Severity::Info)
    }

    /// 실패를 에러 알림으로 표시
    pub fn report_error(&self, error: &dyn fmt::Display) -> NotificationId {
        self.error(error.to_string())
    }

    /// 닫기 버튼 동작: 퇴장 애니메이션 후 제거
    ///
    /// 닫기 버튼은 에러 알림에만 있으므로 그 외 알림은 타이머로만 사라진다.
    /// 알 수 없거나, 닫을 수 없거나, 이미 퇴장 중인 알림이면 `false`.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let dismissible = self
            .inner
            .state
            .lock()
            .entries
            .iter()
            .find(|e| e.notification.id == id)
            .is_some_and(|e| e.notification.is_dismissible());
        if !dismissible || !self.inner.begin_exit(id) {
            return false;
        }
        self.schedule_exit(id, None);
        true
    }

    /// 알림의 현재 단계. 큐에 없으면 `Removed`.
    pub fn phase(&self, id: NotificationId) -> NotificationPhase {
        self.inner
            .state
            .lock()
            .entries
            .iter()
            .find(|e| e.notification.id == id)
            .map(|e| e.phase)
            .unwrap_or(NotificationPhase::Removed)
    }

    /// 컨테이너에 남아 있는 알림 수 (퇴장 중 포함)
    pub fn visible_count(&self) -> usize {
        self.inner.state.lock().entries.len()
    }

    /// 표시 순서대로 알림 스냅샷
    pub fn visible(&self) -> Vec<Notification> {
        self.inner
            .state
            .lock()
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    /// 표시면 정리. 이후 타이머는 모두 no-op이 되며,
    /// 다음 `display`는 표시면을 다시 준비한다.
    pub fn dispose(&self) {
        let mut state = self.inner.state.lock();
        for entry in state.entries.drain(..) {
            self.inner.surface.remove(entry.notification.id);
        }
        if state.mounted {
            self.inner.surface.unmount();
            state.mounted = false;
            debug!("토스트 표시면 해제");
        }
    }

    fn mount_locked(&self, state: &mut QueueState) {
        if !state.mounted {
            self.inner.surface.mount();
            state.mounted = true;
            debug!("토스트 표시면 준비");
        }
    }

    /// `delay` 후 퇴장 시작(자동 소멸), 이어서 퇴장 애니메이션 시간 후 제거.
    /// `delay`가 `None`이면 이미 퇴장이 시작된 상태로 제거만 예약한다.
    fn schedule_exit(&self, id: NotificationId, delay: Option<Duration>) {
        let exit_delay = self.inner.config.exit_delay();
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("tokio 런타임 없음, {id} 타이머 생략");
            if delay.is_none() {
                self.inner.remove(id);
            }
            return;
        };

        handle.spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
                match weak.upgrade() {
                    Some(inner) if inner.begin_exit(id) => {}
                    _ => return,
                }
            }

            tokio::time::sleep(exit_delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        });
    }
}

impl Inner {
    /// `Visible` → `Dismissing`
    fn begin_exit(&self, id: NotificationId) -> bool {
        let mut state = self.state.lock();
        let Some(entry) = state.entries.iter_mut().find(|e| e.notification.id == id) else {
            return false;
        };
        if !entry.phase.can_advance_to(NotificationPhase::Dismissing) {
            return false;
        }
        entry.phase = NotificationPhase::Dismissing;
        self.surface.set_visible(id, false);
        true
    }

    /// 큐와 표시면에서 제거. 없으면 no-op.
    fn remove(&self, id: NotificationId) {
        let mut state = self.state.lock();
        let before = state.entries.len();
        state.entries.retain(|e| e.notification.id != id);
        self.surface.remove(id);
        if state.entries.len() < before {
            debug!("토스트 제거: {id}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html_surface::HtmlSurface;
    use tokio::time::sleep;

    fn service() -> (ToastService, Arc<HtmlSurface>) {
        let surface = Arc::new(HtmlSurface::new());
        let toasts = ToastService::new(surface.clone(), ToastConfig::default());
        (toasts, surface)
    }

    #[test]
    fn init_is_idempotent() {
        let (toasts, surface) = service();
        toasts.init();
        toasts.init();
        assert!(toasts.is_initialized());
        assert_eq!(surface.containers_created(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn display_initializes_lazily() {
        let (toasts, surface) = service();
        assert!(!toasts.is_initialized());
        toasts.info("hello");
        assert!(toasts.is_initialized());
        assert!(surface.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn never_more_than_three_visible() {
        let (toasts, surface) = service();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(toasts.display(format!("msg {i}"), "info"));
            assert!(toasts.visible_count() <= 3);
            assert!(surface.element_ids().len() <= 3);
        }
        // 가장 최근 3개만 남는다
        assert_eq!(surface.element_ids(), ids[7..].to_vec());
        assert_eq!(toasts.phase(ids[0]), NotificationPhase::Removed);
    }

    #[tokio::test(start_paused = true)]
    async fn cap_evicts_errors_too() {
        let (toasts, _surface) = service();
        let first = toasts.error("sticky");
        for i in 0..3 {
            toasts.info(format!("info {i}"));
        }
        assert_eq!(toasts.phase(first), NotificationPhase::Removed);
        assert_eq!(toasts.visible_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_dismiss_after_duration_and_exit_delay() {
        let (toasts, surface) = service();
        let id = toasts.display_for("saved", "success", Duration::from_millis(4_000));
        assert_eq!(toasts.phase(id), NotificationPhase::Visible);
        assert!(surface.has_class(id, "visible"));

        sleep(Duration::from_millis(3_999)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Visible);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Dismissing);
        assert!(!surface.has_class(id, "visible"));
        assert!(surface.element_ids().contains(&id));

        sleep(Duration::from_millis(300)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Removed);
        assert!(surface.element_ids().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn error_never_expires() {
        let (toasts, surface) = service();
        let id = toasts.error("could not save");

        sleep(Duration::from_secs(3_600)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Visible);
        assert!(surface.element_ids().contains(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_runs_exit_transition() {
        let (toasts, surface) = service();
        let id = toasts.error("could not save");

        assert!(toasts.dismiss(id));
        assert_eq!(toasts.phase(id), NotificationPhase::Dismissing);
        // 이미 퇴장 중
        assert!(!toasts.dismiss(id));

        sleep(Duration::from_millis(301)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Removed);
        assert!(surface.element_ids().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_unknown_is_noop() {
        let (toasts, _surface) = service();
        assert!(!toasts.dismiss(NotificationId::next()));
    }

    #[tokio::test(start_paused = true)]
    async fn late_timer_after_eviction_is_harmless() {
        let (toasts, surface) = service();
        let early = toasts.display_for("early", "info", Duration::from_millis(1_000));
        let rest: Vec<_> = (0..3)
            .map(|i| toasts.display_for(format!("late {i}"), "info", Duration::from_secs(10)))
            .collect();
        assert_eq!(toasts.phase(early), NotificationPhase::Removed);

        // early의 타이머가 실행되어도 다른 항목에 영향 없음
        sleep(Duration::from_millis(1_500)).await;
        assert_eq!(surface.element_ids(), rest);
        for id in rest {
            assert_eq!(toasts.phase(id), NotificationPhase::Visible);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_severity_renders_literally() {
        let (toasts, surface) = service();
        let id = toasts.display("heads up", "warning");
        assert!(surface.has_class(id, "warning"));
        assert!(!surface.render().contains("dismiss"));

        // 에러가 아니므로 자동 소멸
        sleep(Duration::from_millis(4_301)).await;
        assert_eq!(toasts.phase(id), NotificationPhase::Removed);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_clears_and_next_display_remounts() {
        let (toasts, surface) = service();
        toasts.info("one");
        toasts.error("two");
        toasts.dispose();
        assert!(!toasts.is_initialized());
        assert!(!surface.is_mounted());
        assert_eq!(toasts.visible_count(), 0);

        // 해제 후 타이머는 no-op
        sleep(Duration::from_secs(5)).await;
        assert_eq!(toasts.visible_count(), 0);

        toasts.info("three");
        assert!(surface.is_mounted());
        assert_eq!(surface.containers_created(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn host_container_is_kept_across_dispose() {
        let surface = Arc::new(HtmlSurface::with_container());
        let toasts = ToastService::new(surface.clone(), ToastConfig::default());
        toasts.error("first");
        toasts.dispose();
        assert!(surface.is_mounted());
        assert!(surface.element_ids().is_empty());

        toasts.error("second");
        assert_eq!(surface.containers_created(), 0);
        assert_eq!(surface.element_ids().len(), 1);
    }

    #[test]
    fn without_runtime_toasts_stay_until_dismissed() {
        let (toasts, surface) = service();
        let info = toasts.success("no runtime");
        assert_eq!(toasts.phase(info), NotificationPhase::Visible);

        let err = toasts.error("no runtime either");
        assert!(toasts.dismiss(err));
        assert_eq!(toasts.phase(err), NotificationPhase::Removed);
        assert_eq!(surface.element_ids(), vec![info]);
    }

    #[tokio::test(start_paused = true)]
    async fn only_errors_can_be_dismissed() {
        let (toasts, _surface) = service();
        let info = toasts.info("fyi");
        let ok = toasts.success("saved");

        assert!(!toasts.dismiss(info));
        assert!(!toasts.dismiss(ok));
        assert_eq!(toasts.phase(info), NotificationPhase::Visible);
        assert_eq!(toasts.phase(ok), NotificationPhase::Visible);

        // 타이머로는 정상 퇴장
        sleep(Duration::from_millis(4_301)).await;
        assert_eq!(toasts.phase(info), NotificationPhase::Removed);
        assert_eq!(toasts.phase(ok), NotificationPhase::Removed);
    }

    #[tokio::test(start_paused = true)]
    async fn configured_cap_never_exceeds_three() {
        let surface = Arc::new(HtmlSurface::new());
        let toasts = ToastService::new(
            surface.clone(),
            ToastConfig {
                max_visible: 5,
                ..ToastConfig::default()
            },
        );
        for i in 0..6 {
            toasts.error(format!("err {i}"));
        }
        assert_eq!(toasts.visible_count(), 3);
        assert_eq!(surface.element_ids().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_cap_still_shows_newest() {
        let toasts = ToastService::new(
            Arc::new(HtmlSurface::new()),
            ToastConfig {
                max_visible: 0,
                ..ToastConfig::default()
            },
        );
        toasts.error("first");
        let newest = toasts.error("second");
        assert_eq!(toasts.visible_count(), 1);
        assert_eq!(toasts.phase(newest), NotificationPhase::Visible);
    }

    #[tokio::test(start_paused = true)]
    async fn report_error_uses_display_text() {
        let (toasts, _surface) = service();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let id = toasts.report_error(&err);
        let shown = toasts.visible();
        assert_eq!(shown[0].id, id);
        assert_eq!(shown[0].message, "disk full");
        assert_eq!(shown[0].severity, Severity::Error);
    }
}
