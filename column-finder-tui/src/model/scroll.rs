//! 横向滚动状态
//!
//! 动画按帧推进：每帧向目标收敛约三分之一的剩余距离，
//! 和浏览器里 "fast" 档的缓动观感接近。

/// 滚动偏移与进行中的动画
#[derive(Debug, Default)]
pub struct ScrollState {
    /// 当前偏移
    pub offset: i64,
    target: Option<i64>,
}

impl ScrollState {
    /// 创建初始滚动状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 启动一次滚动动画
    pub fn start(&mut self, target: i64) {
        self.target = Some(target);
    }

    /// 是否有动画在进行
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// 推进一帧
    ///
    /// 返回 `true` 表示动画恰好在这一帧完成。
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let delta = target - self.offset;
        if delta == 0 {
            self.target = None;
            return true;
        }

        let step = (delta.abs() / 3).max(2).min(delta.abs());
        self.offset += step * delta.signum();

        if self.offset == target {
            self.target = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_converges_to_the_target_and_completes_once() {
        let mut scroll = ScrollState::new();
        scroll.start(40);

        let mut completed = 0;
        for _ in 0..64 {
            if scroll.tick() {
                completed += 1;
            }
        }

        assert_eq!(scroll.offset, 40);
        assert_eq!(completed, 1);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn tick_handles_backward_scrolls() {
        let mut scroll = ScrollState {
            offset: 100,
            ..ScrollState::new()
        };
        scroll.start(0);

        while scroll.is_animating() {
            scroll.tick();
        }

        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn tick_without_animation_is_a_noop() {
        let mut scroll = ScrollState::new();
        assert!(!scroll.tick());
        assert_eq!(scroll.offset, 0);
    }
}
