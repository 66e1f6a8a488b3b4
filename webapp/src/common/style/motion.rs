// entrance animations
//
// .enter plays once when the element is first painted; .reveal sections stay hidden until
// the Reveal component adds .visible, which it only ever does once per mount
pub const MOTION_STYLES: &str = r#"
@keyframes rise-in {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes drop-in {
  from {
    opacity: 0;
    transform: translateY(-20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.enter {
  animation: rise-in var(--entrance-duration) var(--easing-standard) both;
}

.mobile-panel {
  animation: drop-in var(--menu-duration) var(--easing-standard) both;
}

.reveal {
  opacity: 0;
  transition: opacity var(--reveal-duration) ease-out,
              transform var(--reveal-duration) ease-out;
}

.reveal.from-left {
  transform: translateX(-30px);
}

.reveal.from-right {
  transform: translateX(30px);
}

.reveal.rise {
  transform: translateY(30px);
}

.reveal.fade {
  transition-duration: var(--fade-duration);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .enter,
  .mobile-panel {
    animation: none;
  }

  .reveal {
    opacity: 1;
    transform: none;
    transition: none;
  }
}
"#;
