//! 토스트 표시면 포트.
//!
//! 브라우저의 `toast-container` 요소에 해당하는 렌더링 대상.
//! 구현: `peerview-ui` crate (`HtmlSurface`), `peerview-app` (`TerminalSurface`)

use crate::models::notification::{Notification, NotificationId};

/// 알림 컨테이너 id
pub const CONTAINER_ID: &str = "toast-container";

/// 토스트 렌더링 대상
///
/// 큐 정책(최대 개수, 타이머)은 호출자가 관리하고,
/// 표시면은 전달받은 변경만 반영한다.
pub trait ToastSurface: Send + Sync {
    /// 컨테이너 준비. 이미 있으면 아무 것도 하지 않는다.
    fn mount(&self);

    /// 컨테이너 제거
    fn unmount(&self);

    /// 컨테이너 끝에 알림 요소 추가
    fn append(&self, notification: &Notification);

    /// 진입/퇴장 애니메이션 클래스 토글
    fn set_visible(&self, id: NotificationId, visible: bool);

    /// 요소 제거. 없는 요소면 no-op.
    fn remove(&self, id: NotificationId);
}
