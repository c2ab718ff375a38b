//! Slide layouts.
//!
//! Generated decks carry exactly two layouts, both children of a single
//! slide master: "Title Slide" (centered title and subtitle) and
//! "Title and Content" (title and body placeholder).

use crate::constants::{NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS};

/// Position and size of a placeholder, in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Left offset
    pub x: i64,
    /// Top offset
    pub y: i64,
    /// Width
    pub cx: i64,
    /// Height
    pub cy: i64,
}

/// One of the built-in slide layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Title slide (ctrTitle + subTitle)
    Title,
    /// Title and content (title + body)
    TitleAndContent,
}

impl SlideLayout {
    /// All layouts, in part order
    pub const ALL: [SlideLayout; 2] = [SlideLayout::Title, SlideLayout::TitleAndContent];

    /// Layout index (1-based, matching slideLayoutN.xml)
    pub fn index(self) -> u32 {
        match self {
            SlideLayout::Title => 1,
            SlideLayout::TitleAndContent => 2,
        }
    }

    /// Layout display name
    pub fn name(self) -> &'static str {
        match self {
            SlideLayout::Title => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
        }
    }

    /// Value of the layout's `type` attribute
    pub fn layout_type(self) -> &'static str {
        match self {
            SlideLayout::Title => "title",
            SlideLayout::TitleAndContent => "obj",
        }
    }

    /// Placeholder type of the title shape
    pub fn title_placeholder(self) -> &'static str {
        match self {
            SlideLayout::Title => "ctrTitle",
            SlideLayout::TitleAndContent => "title",
        }
    }

    /// Placeholder element (`<p:ph .../>`) of the second shape
    pub fn body_placeholder(self) -> &'static str {
        match self {
            SlideLayout::Title => r#"<p:ph type="subTitle" idx="1"/>"#,
            SlideLayout::TitleAndContent => r#"<p:ph idx="1"/>"#,
        }
    }

    /// Frames of the title and body placeholders
    pub fn frames(self) -> (Frame, Frame) {
        match self {
            SlideLayout::Title => (
                Frame { x: 685_800, y: 2_130_425, cx: 7_772_400, cy: 1_470_025 },
                Frame { x: 1_371_600, y: 3_886_200, cx: 6_400_800, cy: 1_752_600 },
            ),
            SlideLayout::TitleAndContent => (
                Frame { x: 457_200, y: 274_638, cx: 8_229_600, cy: 1_143_000 },
                Frame { x: 457_200, y: 1_600_200, cx: 8_229_600, cy: 4_525_963 },
            ),
        }
    }

    /// Package path of the layout part
    pub fn part_name(self) -> String {
        format!("ppt/slideLayouts/slideLayout{}.xml", self.index())
    }

    /// Generate the layout part
    pub fn to_xml(self) -> String {
        let (title_frame, body_frame) = self.frames();
        let body_name = match self {
            SlideLayout::Title => "Subtitle 2",
            SlideLayout::TitleAndContent => "Content Placeholder 2",
        };

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">
  <p:cSld name="{}">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            self.layout_type(),
            self.name(),
            placeholder_shape(
                2,
                "Title 1",
                &format!(r#"<p:ph type="{}"/>"#, self.title_placeholder()),
                title_frame
            ),
            placeholder_shape(3, body_name, self.body_placeholder(), body_frame),
        )
    }
}

fn placeholder_shape(id: u32, name: &str, ph: &str, frame: Frame) -> String {
    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{}" name="{}"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr>{}</p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{}" y="{}"/>
            <a:ext cx="{}" cy="{}"/>
          </a:xfrm>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="en-US"/></a:p>
        </p:txBody>
      </p:sp>
"#,
        id, name, ph, frame.x, frame.y, frame.cx, frame.cy
    )
}
